//! nullsafe-analysis: class-level nullsafe classification.
//!
//! Rolls per-method nullability findings up per class, computes the
//! strictest enforcement mode the class could adopt with zero violations,
//! and emits one meta-issue per class.
//!
//! - `modes`: enforcement modes and their strictness order
//! - `classifier`: which findings count as reportable violations
//! - `promotion`: strictest zero-issue mode and genuine promotion
//! - `meta_issue`: four-way classification with message and metadata
//! - `aggregator`: per-class collection and sink emission
//! - `reporters`: JSON and console rendering of emitted records

pub mod aggregator;
pub mod class_name;
pub mod classifier;
pub mod collaborators;
pub mod finding;
pub mod meta_issue;
pub mod modes;
pub mod promotion;
pub mod reporters;

pub use aggregator::{ClassAggregator, ClassOutcome, Collaborators, RunSummary};
pub use class_name::ClassName;
pub use classifier::{is_typing_rule_violation, reportable_violations, Reportability, TrustPolicy};
pub use finding::{Finding, FindingKind, FindingOrigin, Location};
pub use meta_issue::{MetaIssue, MetaIssueBuilder, MetaIssueCategory, MetaIssueInfo, Severity};
pub use modes::{EnforcementMode, Trust, PROMOTION_CHAIN};
pub use promotion::PromotionAnalyzer;
