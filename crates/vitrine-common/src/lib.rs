//! Vitrine Common - shared types and error definitions

pub mod error;

pub use error::VitrineError;
