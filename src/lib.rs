pub mod batch;
pub mod csv;
pub mod engine;
pub mod model;

pub use engine::{ValidationError, resolve, run, simulate};
pub use model::{Parameters, PeriodRecord, RawInputs, Scenario, ScenarioId, Simulation};
