//! Reporters — output formats for emitted meta-issue records.

pub mod console;
pub mod json;

use nullsafe_core::config::ReportConfig;
use nullsafe_core::constants::REPORT_FORMATS;

use crate::collaborators::MetaIssueRecord;

/// Trait for report generation.
pub trait Reporter: Send + Sync {
    fn name(&self) -> &'static str;
    fn generate(&self, records: &[MetaIssueRecord]) -> Result<String, String>;
}

/// Create a reporter by format name.
pub fn create_reporter(format: &str, use_color: bool) -> Option<Box<dyn Reporter>> {
    match format {
        "json" => Some(Box::new(json::JsonReporter)),
        "console" => Some(Box::new(console::ConsoleReporter::new(use_color))),
        _ => None,
    }
}

/// Create the reporter selected by `[report]` config.
pub fn reporter_for(config: &ReportConfig) -> Option<Box<dyn Reporter>> {
    create_reporter(config.effective_format(), config.effective_use_color())
}

/// List all available reporter format names.
pub fn available_formats() -> &'static [&'static str] {
    REPORT_FORMATS
}
