//! Class aggregator — rolls method findings up into one meta-issue per class.

use std::collections::HashSet;

use nullsafe_core::config::MetaIssueConfig;
use nullsafe_core::errors::{AnalysisError, InternalError};

use crate::class_name::ClassName;
use crate::classifier::{Reportability, TrustPolicy};
use crate::collaborators::{
    ClassInfo, ClassTable, IssueSink, MetaIssueRecord, ModeResolver, NullsafeExtra, SummaryStore,
    TraceElem,
};
use crate::finding::Finding;
use crate::meta_issue::{MetaIssueBuilder, MetaIssueCategory};
use crate::modes::EnforcementMode;

/// Host services the aggregator reads from and writes to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub classes: &'a dyn ClassTable,
    pub modes: &'a dyn ModeResolver,
    pub summaries: &'a dyn SummaryStore,
    pub sink: &'a dyn IssueSink,
}

/// What happened to one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassOutcome {
    Emitted(MetaIssueCategory),
    /// The class table had no entry; nothing was emitted.
    Skipped,
    /// Every meta-issue kind is disabled; no work was done.
    Disabled,
}

/// Counts for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub emitted: usize,
    pub skipped: usize,
}

/// Drives classification for each class and emits the result to the sink.
pub struct ClassAggregator<'a> {
    collaborators: Collaborators<'a>,
    reportability: Box<dyn Reportability + 'a>,
    promotion_chain: Option<&'a [EnforcementMode]>,
    enabled: bool,
}

impl<'a> ClassAggregator<'a> {
    /// The configuration gate is read once, here.
    pub fn new(config: &MetaIssueConfig, collaborators: Collaborators<'a>) -> Self {
        Self {
            collaborators,
            reportability: Box::new(TrustPolicy::from_config(config)),
            promotion_chain: None,
            enabled: config.should_analyze_meta_issues(),
        }
    }

    /// Replace the bundled `TrustPolicy` with host-specific reportability rules.
    pub fn with_reportability(mut self, reportability: Box<dyn Reportability + 'a>) -> Self {
        self.reportability = reportability;
        self
    }

    #[cfg(test)]
    fn with_promotion_chain(mut self, chain: &'a [EnforcementMode]) -> Self {
        self.promotion_chain = Some(chain);
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Analyze one class and emit exactly one meta-issue for it.
    ///
    /// A class missing from the class table is skipped. An `InternalError`
    /// is fatal and must not be turned into a skip by callers.
    pub fn analyze_class(&self, name: &ClassName) -> Result<ClassOutcome, InternalError> {
        if !self.enabled {
            return Ok(ClassOutcome::Disabled);
        }

        let info = match self.collaborators.classes.lookup_class(name) {
            Some(info) => info,
            None => {
                tracing::debug!(class = %name, "no structural info for class, skipping meta-issue");
                return Ok(ClassOutcome::Skipped);
            }
        };

        let current_mode = self.collaborators.modes.resolve_current_mode(name);
        let findings = self.collect_findings(&info);
        let mut builder = MetaIssueBuilder::new(&*self.reportability);
        if let Some(chain) = self.promotion_chain {
            builder = builder.with_promotion_chain(chain);
        }
        let issue = builder.build(name, &current_mode, &findings)?;

        let location = info.declaration_or_default();
        let category = issue.category;
        tracing::trace!(
            class = %name,
            category = %category,
            current_mode = %current_mode,
            findings = findings.len(),
            "emitting meta-issue"
        );

        let record = MetaIssueRecord {
            class_name: name.clone(),
            location: location.clone(),
            severity: issue.severity,
            trace: vec![TraceElem {
                location,
                description: format!("class `{}`", name.simple_name()),
            }],
            extra: NullsafeExtra {
                class_name: name.clone(),
                package: name.package().map(str::to_string),
                meta_issue_info: issue.info,
            },
            category,
            issue_type: category.issue_type().to_string(),
            message: issue.message,
        };
        self.collaborators.sink.log_meta_issue(record);

        Ok(ClassOutcome::Emitted(category))
    }

    /// Analyze every top-level class in `names`.
    ///
    /// Anonymous units are skipped here because their findings are folded
    /// into their owning class. Stops at the first internal error.
    pub fn run<'n, I>(&self, names: I) -> Result<RunSummary, AnalysisError>
    where
        I: IntoIterator<Item = &'n ClassName>,
    {
        let mut summary = RunSummary::default();
        if !self.enabled {
            tracing::debug!("all meta-issue kinds disabled, skipping class aggregation");
            return Ok(summary);
        }

        for name in names {
            if name.is_anonymous() {
                continue;
            }
            match self.analyze_class(name)? {
                ClassOutcome::Emitted(_) => summary.emitted += 1,
                ClassOutcome::Skipped => summary.skipped += 1,
                ClassOutcome::Disabled => {}
            }
        }

        tracing::info!(
            emitted = summary.emitted,
            skipped = summary.skipped,
            "meta-issue run complete"
        );
        Ok(summary)
    }

    /// Flatten findings from the class and every nested anonymous unit.
    fn collect_findings(&self, info: &ClassInfo) -> Vec<Finding> {
        let mut findings = Vec::new();
        let mut visited: HashSet<ClassName> = HashSet::new();
        visited.insert(info.name.clone());
        self.extend_from_unit(info, &mut findings);

        let mut pending: Vec<ClassName> = info.nested_units.clone();
        while let Some(unit) = pending.pop() {
            if !visited.insert(unit.clone()) {
                continue;
            }
            match self.collaborators.classes.lookup_class(&unit) {
                Some(unit_info) => {
                    self.extend_from_unit(&unit_info, &mut findings);
                    pending.extend(unit_info.nested_units.iter().cloned());
                }
                None => {
                    tracing::debug!(
                        owner = %info.name,
                        unit = %unit,
                        "no structural info for nested unit, ignoring its findings"
                    );
                }
            }
        }
        findings
    }

    fn extend_from_unit(&self, unit: &ClassInfo, findings: &mut Vec<Finding>) {
        for summary in self.collaborators.summaries.collect_summaries(unit) {
            findings.extend(summary.findings().iter().cloned());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::{CollectingSink, Summary};

    /// Two default-mode classes with no findings.
    struct TwoClasses;

    impl ClassTable for TwoClasses {
        fn lookup_class(&self, name: &ClassName) -> Option<ClassInfo> {
            Some(ClassInfo {
                name: name.clone(),
                source_file: format!("src/{}.java", name.simple_name()),
                declaration: None,
                nested_units: Vec::new(),
            })
        }
    }

    impl ModeResolver for TwoClasses {
        fn resolve_current_mode(&self, _name: &ClassName) -> EnforcementMode {
            EnforcementMode::Default
        }
    }

    impl SummaryStore for TwoClasses {
        fn collect_summaries(&self, _class: &ClassInfo) -> Vec<Summary> {
            Vec::new()
        }
    }

    fn collaborators<'a>(program: &'a TwoClasses, sink: &'a CollectingSink) -> Collaborators<'a> {
        Collaborators {
            classes: program,
            modes: program,
            summaries: program,
            sink,
        }
    }

    #[test]
    fn unsanctioned_target_aborts_run_before_emitting() {
        let program = TwoClasses;
        let sink = CollectingSink::new();
        let chain = [EnforcementMode::local_trust_only(["b.B"])];
        let aggregator = ClassAggregator::new(
            &MetaIssueConfig::default(),
            collaborators(&program, &sink),
        )
        .with_promotion_chain(&chain);

        let names = [ClassName::new("a.Foo"), ClassName::new("a.Bar")];
        let err = aggregator.run(names.iter()).unwrap_err();

        assert!(err.is_fatal());
        match err {
            AnalysisError::Internal(InternalError::UnexpectedPromotionTarget { class, target }) => {
                assert_eq!(class, "a.Foo");
                assert_eq!(target, "LocalTrustOnly[b.B]");
            }
            other => panic!("expected internal error, got {other:?}"),
        }
        assert!(sink.is_empty());
    }

    #[test]
    fn default_chain_emits_for_every_class() {
        let program = TwoClasses;
        let sink = CollectingSink::new();
        let aggregator =
            ClassAggregator::new(&MetaIssueConfig::default(), collaborators(&program, &sink));

        let names = [ClassName::new("a.Foo"), ClassName::new("a.Bar")];
        let summary = aggregator.run(names.iter()).unwrap();

        assert_eq!(summary, RunSummary { emitted: 2, skipped: 0 });
        assert_eq!(sink.len(), 2);
    }
}
