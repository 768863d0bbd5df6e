//! Report output configuration.

use serde::{Deserialize, Serialize};

/// Configuration for rendering emitted meta-issues.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Output format: `json` or `console`. Default: `json`.
    pub format: Option<String>,
    /// Use ANSI colors in console output. Default: true.
    pub use_color: Option<bool>,
}

impl ReportConfig {
    pub fn effective_format(&self) -> &str {
        self.format.as_deref().unwrap_or("json")
    }

    pub fn effective_use_color(&self) -> bool {
        self.use_color.unwrap_or(true)
    }
}
