//! Lintbridge Utilities - Path and Logging Helpers
//!
//! This crate provides the small cross-cutting pieces the core pipeline
//! leans on:
//! - Lexical path normalization and scope checks
//! - Logging setup on the tracing ecosystem

#![warn(clippy::all, clippy::pedantic, clippy::nursery)]

pub mod file;
pub mod logging;

/// Re-export commonly used utilities
pub use file::{normalize_path, path_within, relative_to_root};
pub use logging::{init_logging, LoggerConfig};

/// Result type used throughout lintbridge utilities
pub type Result<T> = std::result::Result<T, UtilError>;

/// Error types for utility operations
#[derive(Debug, thiserror::Error)]
pub enum UtilError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
