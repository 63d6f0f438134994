//! Server models: configuration, application state, response wrappers

pub mod app_state;
pub mod config;
pub mod response;

pub use app_state::AppState;
pub use config::Configuration;
pub use response::Result;
