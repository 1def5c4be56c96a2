use std::str::FromStr;

use super::ValidationError;
use crate::model::{Parameters, RawInputs};

/// Resolve raw inputs into validated parameters.
///
/// Missing or blank fields take their value from [`Parameters::DEFAULT`];
/// present fields are trimmed and parsed strictly. Any parse failure or
/// non-positive value rejects the whole set.
pub fn resolve(raw: &RawInputs) -> Result<Parameters, ValidationError> {
    let defaults = Parameters::DEFAULT;

    let initial = field(raw.initial.as_deref(), defaults.initial())?;
    let rate = field(raw.rate.as_deref(), defaults.rate())?;
    let return_factor = field(raw.return_factor.as_deref(), defaults.return_factor())?;
    let duration = duration_field(raw.duration.as_deref(), defaults.duration())?;

    Parameters::new(initial, rate, return_factor, duration)
}

/// Parse one field, falling back to `default` when it is blank
fn field<T: FromStr>(raw: Option<&str>, default: T) -> Result<T, ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(default),
        Some(text) => text.parse().map_err(|_| ValidationError),
    }
}

/// Parse the period count. Whole-valued decimal text such as "365.0" or
/// "1e2" is accepted; fractional or out-of-range values are not.
fn duration_field(raw: Option<&str>, default: u32) -> Result<u32, ValidationError> {
    let value: f64 = field(raw, f64::from(default))?;
    if !value.is_finite() || value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return Err(ValidationError);
    }
    Ok(value as u32)
}
