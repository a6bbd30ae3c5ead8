//! Arithmetic HTTP functions: `multiply` and `divide` over query-string integers.

pub mod config;
pub mod functions;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
