//! Error types for the quality layer

use thiserror::Error;

/// Errors that can occur during a quality check
///
/// Note that judge failures are not here: an unreachable or rate-limited
/// judge degrades to a fallback report rather than erroring.
#[derive(Error, Debug)]
pub enum QualityError {
    /// Scene code exceeds the configured maximum length
    #[error("Scene code too long: {0} chars (max: {1})")]
    CodeTooLong(usize, usize),

    /// Judge provider error
    #[error("Judge error: {0}")]
    Judge(String),

    /// Internal task scheduling failure
    #[error("Task error: {0}")]
    Task(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
