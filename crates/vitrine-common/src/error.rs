//! Error types for Vitrine
//!
//! Read-path failures (store lookups) are recovered locally by the
//! resolver and aggregator and never reach callers; write-path failures
//! are surfaced so operators learn that an edit did not persist.

/// Application-specific error types
#[derive(thiserror::Error, Debug)]
pub enum VitrineError {
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("write failed for key '{0}': {1}")]
    WriteFailed(String, String),

    #[error("unknown image category '{0}'")]
    UnknownCategory(String),
}
