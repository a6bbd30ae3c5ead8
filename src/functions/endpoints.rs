//! `multiply` and `divide` request handlers.
//!
//! Each handler reads `A` then `B`, returning the first failure as the
//! response. Both are pure functions of the query mapping; the HTTP layer
//! wraps them in thin axum handlers.

use thiserror::Error;

use crate::functions::arithmetic;
use crate::functions::params::{required_int, ParamError, QueryParams};
use crate::functions::response::FunctionResponse;

/// Failure of a function invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunctionError {
    #[error(transparent)]
    Param(#[from] ParamError),

    #[error("Division by zero")]
    DivisionByZero,
}

impl From<Result<i128, FunctionError>> for FunctionResponse {
    fn from(result: Result<i128, FunctionError>) -> Self {
        match result {
            Ok(v) => FunctionResponse::value(v),
            Err(e) => FunctionResponse::error(e),
        }
    }
}

/// Compute `A * B`.
pub fn multiply(params: &QueryParams) -> FunctionResponse {
    try_multiply(params).into()
}

/// Compute `A / B`, truncated toward zero.
pub fn divide(params: &QueryParams) -> FunctionResponse {
    try_divide(params).into()
}

fn try_multiply(params: &QueryParams) -> Result<i128, FunctionError> {
    let a = required_int(params, "A")?;
    let b = required_int(params, "B")?;
    Ok(arithmetic::multiply(a, b))
}

fn try_divide(params: &QueryParams) -> Result<i128, FunctionError> {
    let a = required_int(params, "A")?;
    let b = required_int(params, "B")?;
    if b == 0 {
        return Err(FunctionError::DivisionByZero);
    }
    Ok(arithmetic::trunc_div(a, b))
}
