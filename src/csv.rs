use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::model::{RawInputs, Scenario, ScenarioId, Simulation};

/// Errors that can occur when reading scenarios or writing results
#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to open {}: {source}", .path.display())]
    Open { path: PathBuf, source: csv::Error },

    #[error("line {line}: failed to parse row: {source}")]
    Parse { line: usize, source: csv::Error },

    #[error("line {line}: scenario number exceeds {}", ScenarioId::MAX)]
    TooManyScenarios { line: usize },

    #[error("failed to write csv row: {0}")]
    Write(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InputRow {
    initial: Option<String>,
    rate: Option<String>,
    return_factor: Option<String>,
    duration: Option<String>,
}

impl From<InputRow> for RawInputs {
    fn from(row: InputRow) -> Self {
        RawInputs {
            initial: row.initial,
            rate: row.rate,
            return_factor: row.return_factor,
            duration: row.duration,
        }
    }
}

#[derive(Debug, Serialize)]
struct OutputRow {
    scenario: ScenarioId,
    period: u32,
    value_after_first_step: String,
    value_after_second_step: String,
}

/// Read scenarios from a csv file, numbering them from 1 in row order.
///
/// Each item carries the 1-indexed line number of its row.
pub fn read_scenarios(
    path: impl AsRef<Path>,
) -> Result<impl Iterator<Item = Result<(usize, Scenario), CsvError>>, CsvError> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(reader
        .into_deserialize::<InputRow>()
        .enumerate()
        .map(|(idx, result)| {
            let line = idx + 2; // 1-indexed, skip header
            let row = result.map_err(|source| CsvError::Parse { line, source })?;
            let id = scenario_id(idx).ok_or(CsvError::TooManyScenarios { line })?;
            Ok((line, Scenario::new(id, row.into())))
        }))
}

/// 1-indexed scenario number of the row at `idx`
fn scenario_id(idx: usize) -> Option<ScenarioId> {
    idx.checked_add(1).and_then(|n| ScenarioId::try_from(n).ok())
}

/// Writes simulation records as csv, rounding values to two decimals.
pub struct SimulationWriter<W: io::Write> {
    inner: csv::Writer<W>,
}

impl<W: io::Write> SimulationWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            inner: csv::Writer::from_writer(writer),
        }
    }

    /// Write every record of `simulation` tagged with `scenario`
    pub fn write(&mut self, scenario: ScenarioId, simulation: &Simulation) -> Result<(), CsvError> {
        for record in simulation {
            self.inner.serialize(OutputRow {
                scenario,
                period: record.period,
                value_after_first_step: format!("{:.2}", record.value_after_first_step),
                value_after_second_step: format!("{:.2}", record.value_after_second_step),
            })?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), CsvError> {
        self.inner.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer.
    pub fn into_inner(self) -> Result<W, CsvError> {
        self.inner
            .into_inner()
            .map_err(|e| CsvError::Io(io::Error::new(e.error().kind(), e.to_string())))
    }
}
