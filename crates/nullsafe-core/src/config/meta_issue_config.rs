//! Meta-issue configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    META_CLASS_CAN_BE_NULLSAFE, META_CLASS_IS_NULLSAFE, META_CLASS_NEEDS_IMPROVEMENT,
};

/// Which class-level meta-issue kinds are enabled, and which finding
/// kinds are suppressed project-wide.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MetaIssueConfig {
    /// Report `meta_class_can_be_nullsafe`. Default: true.
    pub can_be_nullsafe: Option<bool>,
    /// Report `meta_class_needs_improvement`. Default: true.
    pub needs_improvement: Option<bool>,
    /// Report `meta_class_is_nullsafe`. Default: false.
    pub is_nullsafe: Option<bool>,
    /// Finding kinds that never count as reportable (e.g. `"field_not_initialized"`).
    /// Default: none. An explicit empty list clears a lower layer's list.
    pub suppressed_kinds: Option<Vec<String>>,
}

impl MetaIssueConfig {
    pub fn effective_can_be_nullsafe(&self) -> bool {
        self.can_be_nullsafe.unwrap_or(true)
    }

    pub fn effective_needs_improvement(&self) -> bool {
        self.needs_improvement.unwrap_or(true)
    }

    pub fn effective_is_nullsafe(&self) -> bool {
        self.is_nullsafe.unwrap_or(false)
    }

    pub fn effective_suppressed_kinds(&self) -> &[String] {
        self.suppressed_kinds.as_deref().unwrap_or(&[])
    }

    /// Whether the issue type with the given wire name is enabled.
    /// Unknown issue types are reported as disabled.
    pub fn is_kind_enabled(&self, issue_type: &str) -> bool {
        match issue_type {
            META_CLASS_CAN_BE_NULLSAFE => self.effective_can_be_nullsafe(),
            META_CLASS_NEEDS_IMPROVEMENT => self.effective_needs_improvement(),
            META_CLASS_IS_NULLSAFE => self.effective_is_nullsafe(),
            _ => false,
        }
    }

    /// True unless every one of the three meta-issue kinds is disabled.
    /// Hosts use this to skip class aggregation entirely.
    pub fn should_analyze_meta_issues(&self) -> bool {
        self.effective_can_be_nullsafe()
            || self.effective_needs_improvement()
            || self.effective_is_nullsafe()
    }
}
