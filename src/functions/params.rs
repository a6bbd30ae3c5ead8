//! Required query parameter extraction.

use std::collections::HashMap;
use thiserror::Error;

/// Query parameters of a single request, keyed by name.
pub type QueryParams = HashMap<String, String>;

/// Why a required integer parameter could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParamError {
    /// The parameter is absent from the query string.
    #[error("Missing query parameter {0}")]
    Missing(String),

    /// The parameter is present but is not a base-10 integer.
    #[error("Query parameter {0} must be an integer")]
    NotAnInteger(String),
}

/// Read `name` from `params` as a signed integer.
///
/// Accepts an optional leading `+` or `-` followed by decimal digits, with
/// surrounding whitespace ignored. Floats, empty strings and values outside
/// the `i64` range are rejected.
///
/// A literal too large for `i64` is reported as `NotAnInteger` rather than
/// computed with arbitrary precision.
pub fn required_int(params: &QueryParams, name: &str) -> Result<i64, ParamError> {
    let raw = params
        .get(name)
        .ok_or_else(|| ParamError::Missing(name.to_string()))?;

    raw.trim()
        .parse::<i64>()
        .map_err(|_| ParamError::NotAnInteger(name.to_string()))
}
