//! Server startup: logging bootstrap and HTTP server assembly

pub mod http;
pub mod logging;

pub use http::content_server;
pub use logging::{LoggingConfig, init_logging};
