//! Batch driver feeding a stream of scenarios through the engine.

use std::io;
use tokio_stream::{Stream, StreamExt};
use tracing::{info, warn};

use crate::csv::{CsvError, SimulationWriter};
use crate::engine;
use crate::model::Scenario;

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub simulated: usize,
    pub rejected: usize,
}

/// Simulate every scenario of `stream` in order and write the records.
///
/// A rejected scenario is logged and skipped; only output errors stop the run.
pub async fn run<W: io::Write>(
    mut stream: impl Stream<Item = Scenario> + Unpin,
    writer: &mut SimulationWriter<W>,
) -> Result<BatchSummary, CsvError> {
    let mut summary = BatchSummary::default();

    while let Some(scenario) = stream.next().await {
        match engine::run(&scenario.inputs) {
            Ok(simulation) => {
                info!(
                    scenario = %scenario.id,
                    periods = simulation.len(),
                    final_value = simulation.final_value(),
                    "scenario simulated"
                );
                writer.write(scenario.id, &simulation)?;
                summary.simulated += 1;
            }
            Err(e) => {
                warn!(scenario = %scenario.id, reason = %e, "scenario rejected");
                summary.rejected += 1;
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}
