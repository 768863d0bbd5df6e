//! Meta-issue builder — classifies a class into one of four categories.

use std::fmt;

use nullsafe_core::constants::{
    META_CLASS_CAN_BE_NULLSAFE, META_CLASS_IS_NULLSAFE, META_CLASS_NEEDS_IMPROVEMENT,
};
use nullsafe_core::errors::InternalError;
use serde::{Deserialize, Serialize};

use crate::class_name::ClassName;
use crate::classifier::Reportability;
use crate::finding::Finding;
use crate::modes::{EnforcementMode, Trust};
use crate::promotion::PromotionAnalyzer;

const LOCAL_ANNOTATION: &str = "@Nullsafe(Nullsafe.Mode.LOCAL)";
const LOCAL_TRUST_NONE_ANNOTATION: &str =
    "@Nullsafe(value = Nullsafe.Mode.LOCAL, trustOnly = @Nullsafe.TrustList({}))";

/// The four actionable class-level outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaIssueCategory {
    /// Default-mode class with no violations under a stricter mode.
    CanBecomeStrict,
    /// Default-mode class that cannot be promoted yet.
    NeedsImprovement,
    /// Non-default class with violations under its own mode.
    HasRegressions,
    /// Non-default class with no violations under its own mode.
    AlreadyCompliant,
}

impl MetaIssueCategory {
    /// The user-visible issue type this category is reported as.
    pub fn issue_type(&self) -> &'static str {
        match self {
            Self::CanBecomeStrict => META_CLASS_CAN_BE_NULLSAFE,
            Self::NeedsImprovement | Self::HasRegressions => META_CLASS_NEEDS_IMPROVEMENT,
            Self::AlreadyCompliant => META_CLASS_IS_NULLSAFE,
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Self::CanBecomeStrict => Severity::Advice,
            Self::NeedsImprovement | Self::HasRegressions | Self::AlreadyCompliant => {
                Severity::Info
            }
        }
    }
}

impl fmt::Display for MetaIssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::CanBecomeStrict => "can_become_strict",
            Self::NeedsImprovement => "needs_improvement",
            Self::HasRegressions => "has_regressions",
            Self::AlreadyCompliant => "already_compliant",
        };
        f.write_str(name)
    }
}

/// Meta-issue severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Advice,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Advice => f.write_str("advice"),
            Self::Info => f.write_str("info"),
        }
    }
}

/// Metadata attached to every meta-issue, whatever its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaIssueInfo {
    pub violation_count_in_current_mode: usize,
    pub current_mode: EnforcementMode,
    pub promotable_to: Option<EnforcementMode>,
}

/// The single class-level summary issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaIssue {
    pub category: MetaIssueCategory,
    pub message: String,
    pub severity: Severity,
    pub info: MetaIssueInfo,
}

impl MetaIssue {
    pub fn issue_type(&self) -> &'static str {
        self.category.issue_type()
    }
}

/// Mode to recommend, and the annotation text for it, given a promotion target.
///
/// `Strict` is reachable but recommended as `Local` trusting nobody: it is
/// equally safe today and does not break when dependencies change.
/// Any target outside `Local`, `Local` trusting nobody and `Strict` is an
/// `InternalError`; the probe chain never produces one.
pub fn promotion_recommendation(
    class_name: &ClassName,
    target: &EnforcementMode,
) -> Result<(EnforcementMode, &'static str), InternalError> {
    match target {
        EnforcementMode::Local(Trust::All) => Ok((EnforcementMode::local_all(), LOCAL_ANNOTATION)),
        EnforcementMode::Local(Trust::Only(set)) if set.is_empty() => {
            Ok((EnforcementMode::local_trust_none(), LOCAL_TRUST_NONE_ANNOTATION))
        }
        EnforcementMode::Strict => {
            Ok((EnforcementMode::local_trust_none(), LOCAL_TRUST_NONE_ANNOTATION))
        }
        EnforcementMode::Default | EnforcementMode::Local(Trust::Only(_)) => {
            Err(InternalError::UnexpectedPromotionTarget {
                class: class_name.to_string(),
                target: target.to_string(),
            })
        }
    }
}

/// Builds the meta-issue for one class.
pub struct MetaIssueBuilder<'r> {
    analyzer: PromotionAnalyzer<'r>,
}

impl<'r> MetaIssueBuilder<'r> {
    pub fn new(reportability: &'r dyn Reportability) -> Self {
        Self {
            analyzer: PromotionAnalyzer::new(reportability),
        }
    }

    /// Probe `chain` instead of `PROMOTION_CHAIN`.
    pub(crate) fn with_promotion_chain(mut self, chain: &'r [EnforcementMode]) -> Self {
        self.analyzer = self.analyzer.with_chain(chain);
        self
    }

    /// Classify the class. First match wins:
    /// 1. `Default` and promotable → `CanBecomeStrict`
    /// 2. `Default` and not promotable → `NeedsImprovement`
    /// 3. non-default with violations under its own mode → `HasRegressions`
    /// 4. otherwise → `AlreadyCompliant`
    ///
    /// Returns `InternalError` when the promotion target is outside the
    /// three sanctioned modes. That error is fatal for the run.
    pub fn build(
        &self,
        class_name: &ClassName,
        current_mode: &EnforcementMode,
        findings: &[Finding],
    ) -> Result<MetaIssue, InternalError> {
        let current_count = self.analyzer.violation_count(findings, current_mode);
        // The Strict downgrade can land on `current_mode` itself; that is no promotion.
        let recommendation = self
            .analyzer
            .mode_to_promote_to(current_mode, findings)
            .map(|target| promotion_recommendation(class_name, &target))
            .transpose()?
            .filter(|(mode, _)| mode.is_stricter_than(current_mode));

        let simple_name = class_name.simple_name();
        let (category, message) = if current_mode.is_default() {
            match recommendation {
                Some((_, annotation)) => (
                    MetaIssueCategory::CanBecomeStrict,
                    format!(
                        "Congrats! `{simple_name}` is free of nullability issues. \
                         Mark it `{annotation}` to prevent regressions."
                    ),
                ),
                None => {
                    let remaining = self
                        .analyzer
                        .violation_count(findings, &EnforcementMode::local_all());
                    (
                        MetaIssueCategory::NeedsImprovement,
                        format!(
                            "`{simple_name}` needs work before it can be marked @Nullsafe: \
                             {remaining} {} remaining.",
                            plural_issues(remaining)
                        ),
                    )
                }
            }
        } else if current_count > 0 {
            (
                MetaIssueCategory::HasRegressions,
                format!(
                    "`{simple_name}` is declared `{current_mode}` but has {current_count} \
                     nullability {}; @Nullsafe classes are expected to have none.",
                    plural_issues(current_count)
                ),
            )
        } else {
            (
                MetaIssueCategory::AlreadyCompliant,
                format!("`{simple_name}` is free of nullability issues under `{current_mode}`."),
            )
        };

        Ok(MetaIssue {
            category,
            message,
            severity: category.severity(),
            info: MetaIssueInfo {
                violation_count_in_current_mode: current_count,
                current_mode: current_mode.clone(),
                promotable_to: recommendation.map(|(mode, _)| mode),
            },
        })
    }
}

fn plural_issues(n: usize) -> &'static str {
    if n == 1 {
        "issue"
    } else {
        "issues"
    }
}
