//! JSON reporter.

use serde::Serialize;

use super::Reporter;
use crate::collaborators::MetaIssueRecord;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonReport<'a> {
    total: usize,
    issues: &'a [MetaIssueRecord],
}

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, records: &[MetaIssueRecord]) -> Result<String, String> {
        let report = JsonReport {
            total: records.len(),
            issues: records,
        };
        serde_json::to_string_pretty(&report).map_err(|e| e.to_string())
    }
}
