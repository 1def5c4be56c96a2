//! Core domain types for the compounding simulator.

use serde::Serialize;

use crate::engine::ValidationError;

/// Scenario identifier, assigned by the caller.
pub type ScenarioId = u32;

/// Raw, possibly missing, parameter inputs collected by a caller.
///
/// `None`, empty and whitespace-only fields all mean "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawInputs {
    pub initial: Option<String>,
    pub rate: Option<String>,
    pub return_factor: Option<String>,
    pub duration: Option<String>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, value: impl ToString) -> Self {
        self.initial = Some(value.to_string());
        self
    }

    pub fn with_rate(mut self, value: impl ToString) -> Self {
        self.rate = Some(value.to_string());
        self
    }

    pub fn with_return_factor(mut self, value: impl ToString) -> Self {
        self.return_factor = Some(value.to_string());
        self
    }

    pub fn with_duration(mut self, value: impl ToString) -> Self {
        self.duration = Some(value.to_string());
        self
    }
}

/// A scenario submitted to the batch driver.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub id: ScenarioId,
    pub inputs: RawInputs,
}

impl Scenario {
    pub fn new(id: ScenarioId, inputs: RawInputs) -> Self {
        Self { id, inputs }
    }
}

/// Validated simulation parameters.
///
/// Every field is finite and strictly positive. The fields are private so a
/// `Parameters` can only come out of [`Parameters::new`] or
/// [`resolve`](crate::engine::resolve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parameters {
    initial: f64,
    rate: f64,
    return_factor: f64,
    duration: u32,
}

impl Parameters {
    /// Values substituted for missing raw inputs.
    pub const DEFAULT: Parameters = Parameters {
        initial: 333.0,
        rate: 0.01,
        return_factor: 0.88,
        duration: 365,
    };

    pub fn new(
        initial: f64,
        rate: f64,
        return_factor: f64,
        duration: u32,
    ) -> Result<Self, ValidationError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(initial) || !positive(rate) || !positive(return_factor) || duration == 0 {
            return Err(ValidationError);
        }

        Ok(Self {
            initial,
            rate,
            return_factor,
            duration,
        })
    }

    pub fn initial(&self) -> f64 {
        self.initial
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn return_factor(&self) -> f64 {
        self.return_factor
    }

    /// Number of periods to simulate.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    /// Multiplier applied to the running value on every sub-step.
    pub fn step_factor(&self) -> f64 {
        1.0 + self.rate * self.return_factor
    }
}

impl Default for Parameters {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// One simulated period, holding the running value after each sub-step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeriodRecord {
    /// 1-indexed period number.
    pub period: u32,
    pub value_after_first_step: f64,
    pub value_after_second_step: f64,
}

/// Ordered per-period output of a simulation run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Simulation {
    records: Vec<PeriodRecord>,
}

impl Simulation {
    pub(crate) fn from_records(records: Vec<PeriodRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PeriodRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Running value at the end of the last period.
    pub fn final_value(&self) -> Option<f64> {
        self.records.last().map(|r| r.value_after_second_step)
    }

    pub fn into_records(self) -> Vec<PeriodRecord> {
        self.records
    }
}

impl IntoIterator for Simulation {
    type Item = PeriodRecord;
    type IntoIter = std::vec::IntoIter<PeriodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a Simulation {
    type Item = &'a PeriodRecord;
    type IntoIter = std::slice::Iter<'a, PeriodRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
