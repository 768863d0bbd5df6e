//! Violation classification — which findings count, and under which mode.

use std::collections::HashSet;

use nullsafe_core::config::MetaIssueConfig;

use crate::finding::{Finding, FindingKind, FindingOrigin};
use crate::modes::EnforcementMode;

/// Decides whether a finding would surface to the user under a given mode.
///
/// Hosts plug in their own rules (trust-list membership, suppression
/// config). Plain closures implement this trait.
pub trait Reportability: Send + Sync {
    fn is_reportable(&self, finding: &Finding, mode: &EnforcementMode) -> bool;
}

impl<F> Reportability for F
where
    F: Fn(&Finding, &EnforcementMode) -> bool + Send + Sync,
{
    fn is_reportable(&self, finding: &Finding, mode: &EnforcementMode) -> bool {
        self(finding, mode)
    }
}

/// True for findings that break a nullability typing rule.
///
/// `ConditionRedundant` and `OverAnnotation` stay reportable diagnostics
/// elsewhere but never count toward violation totals.
pub fn is_typing_rule_violation(finding: &Finding) -> bool {
    match finding.kind {
        FindingKind::InconsistentSubclass
        | FindingKind::NullableDereference
        | FindingKind::FieldNotInitialized
        | FindingKind::BadAssignment => true,
        FindingKind::ConditionRedundant | FindingKind::OverAnnotation => false,
    }
}

/// Findings that are typing-rule violations and reportable under `mode`.
pub fn reportable_violations<'f>(
    findings: &'f [Finding],
    mode: &EnforcementMode,
    reportability: &dyn Reportability,
) -> Vec<&'f Finding> {
    findings
        .iter()
        .filter(|f| is_typing_rule_violation(f) && reportability.is_reportable(f, mode))
        .collect()
}

/// Default reportability rules keyed on a finding's origin.
///
/// | origin             | Default | Local(All) | Local(Only s)  | Strict |
/// |--------------------|---------|------------|----------------|--------|
/// | intraclass         | yes     | yes        | yes            | yes    |
/// | third party        | no      | yes        | yes            | yes    |
/// | untrusted callee c | no      | no         | c not in s     | yes    |
///
/// Suppressed findings and configured suppressed kinds never report.
#[derive(Debug, Clone, Default)]
pub struct TrustPolicy {
    suppressed_kinds: HashSet<FindingKind>,
}

impl TrustPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from config. Unknown kind names are skipped; config
    /// validation rejects them before this point.
    pub fn from_config(config: &MetaIssueConfig) -> Self {
        let suppressed_kinds = config
            .effective_suppressed_kinds()
            .iter()
            .filter_map(|name| name.parse::<FindingKind>().ok())
            .collect();
        Self { suppressed_kinds }
    }

    pub fn with_suppressed_kind(mut self, kind: FindingKind) -> Self {
        self.suppressed_kinds.insert(kind);
        self
    }
}

impl Reportability for TrustPolicy {
    fn is_reportable(&self, finding: &Finding, mode: &EnforcementMode) -> bool {
        if finding.suppressed || self.suppressed_kinds.contains(&finding.kind) {
            return false;
        }
        match &finding.origin {
            FindingOrigin::Intraclass => true,
            FindingOrigin::ThirdParty { .. } => !mode.is_default(),
            FindingOrigin::UntrustedCallee { class } => match mode {
                EnforcementMode::Default => false,
                EnforcementMode::Local(trust) => !trust.trusts(class),
                EnforcementMode::Strict => true,
            },
        }
    }
}
