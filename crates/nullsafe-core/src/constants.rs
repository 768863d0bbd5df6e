//! Vocabularies shared by config validation and the analysis crate.

/// Wire names of every finding kind the upstream dataflow pass can emit.
pub const FINDING_KINDS: &[&str] = &[
    "inconsistent_subclass",
    "nullable_dereference",
    "field_not_initialized",
    "bad_assignment",
    "condition_redundant",
    "over_annotation",
];

/// Report formats understood by the bundled reporters.
pub const REPORT_FORMATS: &[&str] = &["json", "console"];

/// Issue type emitted when a default-mode class is already free of violations.
pub const META_CLASS_CAN_BE_NULLSAFE: &str = "meta_class_can_be_nullsafe";

/// Issue type emitted when a class still has violations to fix.
pub const META_CLASS_NEEDS_IMPROVEMENT: &str = "meta_class_needs_improvement";

/// Issue type emitted for a class that already satisfies its declared mode.
pub const META_CLASS_IS_NULLSAFE: &str = "meta_class_is_nullsafe";

/// Name of the project-level config file.
pub const PROJECT_CONFIG_FILE: &str = "nullsafe.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "NULLSAFE_LOG";
