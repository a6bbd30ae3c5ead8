//! Arithmetic function endpoints.
//!
//! # Data Flow
//! ```text
//! query string
//!     → params.rs (required integer extraction)
//!     → arithmetic.rs (multiply / truncating divide)
//!     → endpoints.rs (compose, short-circuit on first error)
//!     → response.rs (plain-text body, always 200)
//! ```
//!
//! # Design Decisions
//! - Every outcome, including errors, is a 200 `text/plain` response
//! - `A` is always checked before `B`; the zero-divisor check comes last
//! - Handlers are pure functions of the query mapping

pub mod arithmetic;
pub mod endpoints;
pub mod params;
pub mod response;

pub use endpoints::{divide, multiply, FunctionError};
pub use params::{required_int, ParamError, QueryParams};
pub use response::FunctionResponse;
