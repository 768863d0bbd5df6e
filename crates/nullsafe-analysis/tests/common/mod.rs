//! In-memory collaborators shared by the integration tests.
#![allow(dead_code)]

use std::collections::HashMap;

use nullsafe_analysis::collaborators::*;
use nullsafe_analysis::*;

/// Class table, mode resolver and summary store backed by maps.
#[derive(Default)]
pub struct FakeProgram {
    pub classes: HashMap<ClassName, ClassInfo>,
    pub modes: HashMap<ClassName, EnforcementMode>,
    pub findings: HashMap<ClassName, Vec<Finding>>,
}

impl FakeProgram {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(
        &mut self,
        name: &str,
        mode: EnforcementMode,
        declaration: Option<Location>,
        findings: Vec<Finding>,
    ) -> &mut Self {
        let class = ClassName::new(name);
        self.classes.insert(
            class.clone(),
            ClassInfo {
                name: class.clone(),
                source_file: source_file_for(name),
                declaration,
                nested_units: Vec::new(),
            },
        );
        self.modes.insert(class.clone(), mode);
        self.findings.insert(class, findings);
        self
    }

    pub fn add_nested(&mut self, owner: &str, unit: &str, findings: Vec<Finding>) -> &mut Self {
        let owner = ClassName::new(owner);
        let unit_name = ClassName::new(unit);
        if let Some(info) = self.classes.get_mut(&owner) {
            info.nested_units.push(unit_name.clone());
        }
        self.classes.insert(
            unit_name.clone(),
            ClassInfo {
                name: unit_name.clone(),
                source_file: source_file_for(owner.as_str()),
                declaration: None,
                nested_units: Vec::new(),
            },
        );
        self.findings.insert(unit_name, findings);
        self
    }

    pub fn collaborators<'a>(&'a self, sink: &'a dyn IssueSink) -> Collaborators<'a> {
        Collaborators {
            classes: self,
            modes: self,
            summaries: self,
            sink,
        }
    }
}

impl ClassTable for FakeProgram {
    fn lookup_class(&self, name: &ClassName) -> Option<ClassInfo> {
        self.classes.get(name).cloned()
    }
}

impl ModeResolver for FakeProgram {
    fn resolve_current_mode(&self, name: &ClassName) -> EnforcementMode {
        self.modes.get(name).cloned().unwrap_or(EnforcementMode::Default)
    }
}

impl SummaryStore for FakeProgram {
    fn collect_summaries(&self, class: &ClassInfo) -> Vec<Summary> {
        let findings = self.findings.get(&class.name).cloned().unwrap_or_default();
        vec![
            Summary {
                procedure: format!("{}.<init>", class.name),
                nullsafe: None,
            },
            Summary {
                procedure: format!("{}.run", class.name),
                nullsafe: Some(NullsafePayload { findings }),
            },
        ]
    }
}

pub fn source_file_for(name: &str) -> String {
    let top = name.split('$').next().unwrap_or(name);
    format!("src/{}.java", top.replace('.', "/"))
}

pub fn deref_at(file: &str, line: u32) -> Finding {
    Finding::new(
        FindingKind::NullableDereference,
        Location::new(file, line, 4),
        "dereference of nullable value",
    )
}
