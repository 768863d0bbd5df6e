//! Console reporter — human-readable output with color codes.

use super::Reporter;
use crate::collaborators::MetaIssueRecord;
use crate::meta_issue::{MetaIssueCategory, Severity};

/// Console reporter for terminal output.
pub struct ConsoleReporter {
    pub use_color: bool,
}

impl ConsoleReporter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn category_symbol(&self, category: MetaIssueCategory) -> &'static str {
        match category {
            MetaIssueCategory::CanBecomeStrict => "↑",
            MetaIssueCategory::NeedsImprovement => "…",
            MetaIssueCategory::HasRegressions => "✗",
            MetaIssueCategory::AlreadyCompliant => "✓",
        }
    }

    fn color_start(&self, severity: Severity) -> &'static str {
        if !self.use_color {
            return "";
        }
        match severity {
            Severity::Advice => "\x1b[32m", // green
            Severity::Info => "\x1b[36m",   // cyan
        }
    }

    fn color_end(&self) -> &'static str {
        if self.use_color {
            "\x1b[0m"
        } else {
            ""
        }
    }
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, records: &[MetaIssueRecord]) -> Result<String, String> {
        let mut output = String::new();

        for record in records {
            let info = &record.extra.meta_issue_info;
            output.push_str(&format!(
                "{} {}{}{}: {}: {} [{}]\n",
                self.category_symbol(record.category),
                self.color_start(record.severity),
                record.severity,
                self.color_end(),
                record.location,
                record.message,
                record.issue_type,
            ));
            output.push_str(&format!(
                "    mode: {}, violations: {}",
                info.current_mode, info.violation_count_in_current_mode
            ));
            if let Some(ref target) = info.promotable_to {
                output.push_str(&format!(", promotable to: {target}"));
            }
            output.push('\n');
        }

        let count = |c: MetaIssueCategory| records.iter().filter(|r| r.category == c).count();
        output.push_str(&format!(
            "─── Summary: {} classes, {} promotable, {} need improvement, {} regressed, {} compliant ───\n",
            records.len(),
            count(MetaIssueCategory::CanBecomeStrict),
            count(MetaIssueCategory::NeedsImprovement),
            count(MetaIssueCategory::HasRegressions),
            count(MetaIssueCategory::AlreadyCompliant),
        ));

        Ok(output)
    }
}
