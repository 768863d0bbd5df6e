//! Promotion analysis — the strictest mode a class could adopt today.

use crate::classifier::{reportable_violations, Reportability};
use crate::finding::Finding;
use crate::modes::{EnforcementMode, PROMOTION_CHAIN};

static DEFAULT_CHAIN: [EnforcementMode; 4] = PROMOTION_CHAIN;

/// Finds the strictest zero-violation mode for a set of findings.
pub struct PromotionAnalyzer<'r> {
    reportability: &'r dyn Reportability,
    chain: &'r [EnforcementMode],
}

impl<'r> PromotionAnalyzer<'r> {
    pub fn new(reportability: &'r dyn Reportability) -> Self {
        Self {
            reportability,
            chain: &DEFAULT_CHAIN,
        }
    }

    /// Probe `chain`, strictest first, instead of `PROMOTION_CHAIN`.
    pub(crate) fn with_chain(mut self, chain: &'r [EnforcementMode]) -> Self {
        self.chain = chain;
        self
    }

    /// Number of violations reportable under `mode`.
    pub fn violation_count(&self, findings: &[Finding], mode: &EnforcementMode) -> usize {
        reportable_violations(findings, mode, self.reportability).len()
    }

    /// First mode in `PROMOTION_CHAIN` with no reportable violations.
    /// `None` if even `Default` has violations.
    pub fn strictest_zero_issue_mode(&self, findings: &[Finding]) -> Option<EnforcementMode> {
        self.chain
            .iter()
            .find(|mode| self.violation_count(findings, mode) == 0)
            .cloned()
    }

    /// The strictest zero-violation mode, but only when it is strictly
    /// stricter than `current`. Lateral or backward moves are not promotions.
    pub fn mode_to_promote_to(
        &self,
        current: &EnforcementMode,
        findings: &[Finding],
    ) -> Option<EnforcementMode> {
        self.strictest_zero_issue_mode(findings)
            .filter(|target| target.is_stricter_than(current))
    }
}
