//! Interfaces to the systems around the meta-issue engine.
//!
//! The class table, mode resolution and summary storage belong to the host;
//! the engine only reads through these traits and writes one record per
//! class to an `IssueSink`.

use std::sync::Mutex;

use nullsafe_core::config::MetaIssueConfig;
use serde::{Deserialize, Serialize};

use crate::class_name::ClassName;
use crate::finding::{Finding, Location};
use crate::meta_issue::{MetaIssueCategory, MetaIssueInfo, Severity};
use crate::modes::EnforcementMode;

/// Structural facts about a class, as known to the host's class table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassInfo {
    pub name: ClassName,
    /// Source file that owns the class.
    pub source_file: String,
    /// Declaration position, when the frontend recorded one.
    pub declaration: Option<Location>,
    /// Anonymous units declared inside this class.
    pub nested_units: Vec<ClassName>,
}

impl ClassInfo {
    /// Declaration location, falling back to the start of the source file.
    pub fn declaration_or_default(&self) -> Location {
        self.declaration
            .clone()
            .unwrap_or_else(|| Location::file_start(&self.source_file))
    }
}

/// Nullability section of a per-method summary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NullsafePayload {
    pub findings: Vec<Finding>,
}

/// A per-method analysis summary. Only the nullability payload is read here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub procedure: String,
    pub nullsafe: Option<NullsafePayload>,
}

impl Summary {
    /// Findings in this summary, empty when nullability analysis did not run.
    pub fn findings(&self) -> &[Finding] {
        self.nullsafe
            .as_ref()
            .map(|p| p.findings.as_slice())
            .unwrap_or(&[])
    }
}

/// Host class table.
pub trait ClassTable: Send + Sync {
    fn lookup_class(&self, name: &ClassName) -> Option<ClassInfo>;
}

/// Resolves a class's declared enforcement mode.
pub trait ModeResolver: Send + Sync {
    fn resolve_current_mode(&self, name: &ClassName) -> EnforcementMode;
}

/// Source of per-method summaries.
pub trait SummaryStore: Send + Sync {
    fn collect_summaries(&self, class: &ClassInfo) -> Vec<Summary>;
}

/// One element of an issue trace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceElem {
    pub location: Location,
    pub description: String,
}

/// Structured payload attached to a meta-issue record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullsafeExtra {
    pub class_name: ClassName,
    pub package: Option<String>,
    pub meta_issue_info: MetaIssueInfo,
}

/// Everything the sink receives for one class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaIssueRecord {
    pub class_name: ClassName,
    pub location: Location,
    pub severity: Severity,
    pub trace: Vec<TraceElem>,
    pub extra: NullsafeExtra,
    pub category: MetaIssueCategory,
    pub issue_type: String,
    pub message: String,
}

/// Fire-and-forget destination for meta-issues.
pub trait IssueSink: Send + Sync {
    fn log_meta_issue(&self, record: MetaIssueRecord);
}

/// Sink that keeps every record in memory, for reporters and tests.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<MetaIssueRecord>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return all records collected so far.
    pub fn take(&self) -> Vec<MetaIssueRecord> {
        match self.records.lock() {
            Ok(mut records) => std::mem::take(&mut *records),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(records) => records.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl IssueSink for CollectingSink {
    fn log_meta_issue(&self, record: MetaIssueRecord) {
        match self.records.lock() {
            Ok(mut records) => records.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

/// Forwards only records whose issue type is enabled in `[meta_issues]`.
pub struct KindFilterSink<'s> {
    inner: &'s dyn IssueSink,
    config: MetaIssueConfig,
}

impl<'s> KindFilterSink<'s> {
    pub fn new(inner: &'s dyn IssueSink, config: &MetaIssueConfig) -> Self {
        Self {
            inner,
            config: config.clone(),
        }
    }
}

impl IssueSink for KindFilterSink<'_> {
    fn log_meta_issue(&self, record: MetaIssueRecord) {
        if self.config.is_kind_enabled(&record.issue_type) {
            self.inner.log_meta_issue(record);
        } else {
            tracing::trace!(
                class = %record.class_name,
                issue_type = %record.issue_type,
                "meta-issue kind disabled, dropping record"
            );
        }
    }
}
