//! NullsafeErrorCode trait for structured error reporting.

/// Every error enum implements this to expose a stable code string
/// that hosts can match on without parsing messages.
pub trait NullsafeErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted string: `[ERROR_CODE] message`.
    fn code_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
