use std::process::Command;

fn run(args: &[&str]) -> (String, String, bool) {
    run_with_log(args, "warn")
}

fn run_with_log(args: &[&str], log: &str) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_trade-sim"))
        .args(args)
        .env("RUST_LOG", log)
        .output()
        .expect("failed to run binary");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn run_fixture(fixture: &str) -> (String, String, bool) {
    run(&[&format!("tests/fixtures/{fixture}")])
}

const HEADER: &str = "scenario,period,value_after_first_step,value_after_second_step";

#[test]
fn valid_scenarios() {
    let (stdout, stderr, success) = run_fixture("valid.csv");

    assert!(success);
    assert!(stderr.is_empty());

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            HEADER,
            "1,1,110.00,121.00",
            "2,1,110.00,121.00",
            "2,2,133.10,146.41",
        ]
    );
}

#[test]
fn errors_warn_but_do_not_block() {
    let (stdout, stderr, success) = run_fixture("with_errors.csv");

    assert!(success);
    assert!(stderr.contains("Please enter valid positive numbers."));
    assert!(stderr.contains("line 6"));

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![HEADER, "2,1,110.00,121.00"]);
}

#[test]
fn empty_row_uses_defaults() {
    let (stdout, _, success) = run_fixture("defaults.csv");

    assert!(success);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 366);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with("1,1,"));
    assert!(lines[365].starts_with("1,365,"));
}

#[test]
fn no_arguments_simulates_defaults() {
    let (no_args, _, success) = run(&[]);
    assert!(success);

    let (from_file, _, _) = run_fixture("defaults.csv");
    assert_eq!(no_args, from_file);
}

#[test]
fn missing_file_fails() {
    let (stdout, stderr, success) = run(&["tests/fixtures/does_not_exist.csv"]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("failed to open"));
}

#[test]
fn rust_log_info_enables_info_logs() {
    let (stdout, stderr, success) = run_with_log(&["tests/fixtures/valid.csv"], "info");

    assert!(success);
    assert!(stderr.contains("scenario simulated"));
    assert!(stderr.contains("batch finished"));
    assert_eq!(stdout.lines().count(), 4);
}

#[test]
fn whole_valued_decimal_duration_is_simulated() {
    let (stdout, stderr, success) = run_fixture("decimal_duration.csv");

    assert!(success);
    assert!(stderr.is_empty());
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, vec![HEADER, "1,1,110.00,121.00", "1,2,133.10,146.41"]);
}
