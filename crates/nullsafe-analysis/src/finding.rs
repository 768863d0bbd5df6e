//! Findings produced by the upstream nullability dataflow pass.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Source position. Lines are 1-based, columns 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    /// Line 1, column 0 of `file`. Used when a declaration has no recorded position.
    pub fn file_start(file: impl Into<String>) -> Self {
        Self::new(file, 1, 0)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// Closed vocabulary of nullability finding kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    InconsistentSubclass,
    NullableDereference,
    FieldNotInitialized,
    BadAssignment,
    ConditionRedundant,
    OverAnnotation,
}

impl FindingKind {
    pub const ALL: [FindingKind; 6] = [
        Self::InconsistentSubclass,
        Self::NullableDereference,
        Self::FieldNotInitialized,
        Self::BadAssignment,
        Self::ConditionRedundant,
        Self::OverAnnotation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InconsistentSubclass => "inconsistent_subclass",
            Self::NullableDereference => "nullable_dereference",
            Self::FieldNotInitialized => "field_not_initialized",
            Self::BadAssignment => "bad_assignment",
            Self::ConditionRedundant => "condition_redundant",
            Self::OverAnnotation => "over_annotation",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FindingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown finding kind: {s}"))
    }
}

/// Where the nullability fact behind a finding came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FindingOrigin {
    /// Entirely within the class's own code.
    Intraclass,
    /// Relies on a first-party class that is not itself nullsafe.
    UntrustedCallee { class: String },
    /// Relies on an unvetted third-party class.
    ThirdParty { class: String },
}

/// One nullability issue reported for a method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub location: Location,
    pub message: String,
    pub origin: FindingOrigin,
    /// Suppressed inline at the source (e.g. a lint-suppression annotation).
    #[serde(default)]
    pub suppressed: bool,
}

impl Finding {
    /// An intraclass, unsuppressed finding.
    pub fn new(kind: FindingKind, location: Location, message: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            message: message.into(),
            origin: FindingOrigin::Intraclass,
            suppressed: false,
        }
    }

    pub fn with_origin(mut self, origin: FindingOrigin) -> Self {
        self.origin = origin;
        self
    }

    pub fn suppressed(mut self) -> Self {
        self.suppressed = true;
        self
    }
}
