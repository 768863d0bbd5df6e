//! Errors surfaced by a meta-issue run.

use super::{ConfigError, InternalError, NullsafeErrorCode};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Fatal. The run stops at the first one.
    #[error("Internal error: {0}")]
    Internal(#[from] InternalError),
}

impl AnalysisError {
    /// True for errors that indicate a logic defect rather than bad input.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

impl NullsafeErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Internal(e) => e.error_code(),
        }
    }
}
