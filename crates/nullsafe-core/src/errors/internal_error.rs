//! Internal invariant violations.
//!
//! These are never user-facing conditions. An `InternalError` means a
//! contract inside the engine was broken (for example the promotion probe
//! chain produced a mode the message builder does not know how to
//! recommend). Callers must propagate it and abort the run; it is never
//! downgraded to a skipped class.

use super::error_code::{self, NullsafeErrorCode};

/// Non-recoverable invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InternalError {
    #[error("Unexpected promotion target `{target}` for class {class}")]
    UnexpectedPromotionTarget { class: String, target: String },
}

impl NullsafeErrorCode for InternalError {
    fn error_code(&self) -> &'static str {
        error_code::INTERNAL_ERROR
    }
}
