use std::env;
use std::io;
use std::process::ExitCode;

use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use trade_sim::csv::{SimulationWriter, read_scenarios};
use trade_sim::{RawInputs, Scenario, batch};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let (scenario_sender, scenario_receiver) = tokio::sync::mpsc::channel(16);

    match env::args().nth(1) {
        Some(path) => {
            if !path.ends_with(".csv") {
                warn!(path, "input file seems to not be a csv file");
            }

            let scenarios = match read_scenarios(path) {
                Ok(scenarios) => scenarios,
                Err(e) => {
                    error!("{e}");
                    return ExitCode::FAILURE;
                }
            };

            tokio::spawn(async move {
                for result in scenarios {
                    match result {
                        Ok((_, scenario)) => {
                            if scenario_sender.send(scenario).await.is_err() {
                                break;
                            }
                        }
                        Err(e) => {
                            warn!("{e}");
                        }
                    }
                }
            });
        }
        None => {
            info!("no scenario file given, simulating defaults");
            scenario_sender
                .send(Scenario::new(1, RawInputs::new()))
                .await
                .expect("scenario receiver is held by main");
            drop(scenario_sender);
        }
    }

    let mut writer = SimulationWriter::new(io::stdout().lock());
    match batch::run(ReceiverStream::new(scenario_receiver), &mut writer).await {
        Ok(summary) => {
            info!(
                simulated = summary.simulated,
                rejected = summary.rejected,
                "batch finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
