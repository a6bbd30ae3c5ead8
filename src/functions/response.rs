//! Plain-text function responses.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// Content type of every function response.
pub const TEXT_PLAIN_UTF8: &str = "text/plain; charset=utf-8";

/// Body of a function invocation.
///
/// Errors are not distinguished at the status level: both variants are
/// served as `200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionResponse {
    /// Decimal rendering of a successful result.
    Value(String),
    /// Human readable failure reason, rendered as `ERROR: {reason}`.
    Error(String),
}

impl FunctionResponse {
    pub fn value(v: impl ToString) -> Self {
        FunctionResponse::Value(v.to_string())
    }

    pub fn error(reason: impl ToString) -> Self {
        FunctionResponse::Error(reason.to_string())
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FunctionResponse::Error(_))
    }

    /// Text sent to the client.
    pub fn body(&self) -> String {
        match self {
            FunctionResponse::Value(v) => v.clone(),
            FunctionResponse::Error(reason) => format!("ERROR: {}", reason),
        }
    }
}

impl IntoResponse for FunctionResponse {
    fn into_response(self) -> Response {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF8))],
            self.body(),
        )
            .into_response()
    }
}
