//! HTTP hosting subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned and echoed back)
//!     → handlers.rs (query extraction, metrics, logging)
//!     → functions::endpoints (pure arithmetic)
//!     → plain-text response
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuid, X_REQUEST_ID};
pub use server::HttpServer;
