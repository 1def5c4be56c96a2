//! Error types for parameter resolution.

use thiserror::Error;

/// Returned when any of the four parameters is malformed, non-finite or not
/// strictly positive. Validation is all-or-nothing, so no field detail is
/// carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Please enter valid positive numbers.")]
pub struct ValidationError;
