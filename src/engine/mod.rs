//! Compounding simulation engine.
//!
//! The engine resolves raw inputs into validated parameters and runs the
//! compounding recurrence over them. Each period applies two sub-steps of
//! `value += value * rate * return_factor` and records the running value after
//! each one. Both operations are pure: they hold no state between calls and
//! never log.

use crate::model::{Parameters, PeriodRecord, RawInputs, Simulation};

mod error;
pub use error::ValidationError;

mod resolver;
pub use resolver::resolve;

/// Run the compounding recurrence for `params.duration()` periods.
pub fn simulate(params: &Parameters) -> Simulation {
    let (rate, return_factor) = (params.rate(), params.return_factor());
    let mut compound = params.initial();
    let mut records = Vec::with_capacity(params.duration() as usize);

    for period in 1..=params.duration() {
        compound += compound * rate * return_factor;
        let value_after_first_step = compound;

        compound += compound * rate * return_factor;
        let value_after_second_step = compound;

        records.push(PeriodRecord {
            period,
            value_after_first_step,
            value_after_second_step,
        });
    }

    Simulation::from_records(records)
}

/// Resolve `raw` and simulate it; validation failures stop before any iteration.
pub fn run(raw: &RawInputs) -> Result<Simulation, ValidationError> {
    let params = resolve(raw)?;
    Ok(simulate(&params))
}
