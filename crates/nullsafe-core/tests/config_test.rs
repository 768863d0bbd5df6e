//! Tests for the Nullsafe configuration system.

use std::sync::Mutex;

use nullsafe_core::config::{CliOverrides, MetaIssueConfig, NullsafeConfig};
use nullsafe_core::errors::{ConfigError, NullsafeErrorCode};

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ENV_KEYS: &[&str] = &[
    "NULLSAFE_META_CAN_BE_NULLSAFE",
    "NULLSAFE_META_NEEDS_IMPROVEMENT",
    "NULLSAFE_META_IS_NULLSAFE",
    "NULLSAFE_REPORT_FORMAT",
];

fn clear_nullsafe_env_vars() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

/// Points HOME at an empty directory so no real user config leaks in.
fn isolated_home() -> tempfile::TempDir {
    let home = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", home.path());
    home
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let _home = isolated_home();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("nullsafe.toml"),
        r#"
[meta_issues]
can_be_nullsafe = false
is_nullsafe = true

[report]
format = "console"
"#,
    )
    .unwrap();

    std::env::set_var("NULLSAFE_META_IS_NULLSAFE", "false");

    let cli = CliOverrides {
        can_be_nullsafe: Some(true),
        ..Default::default()
    };
    let config = NullsafeConfig::load(dir.path(), Some(&cli)).unwrap();

    // CLI beats project.
    assert_eq!(config.meta_issues.can_be_nullsafe, Some(true));
    // Env beats project.
    assert_eq!(config.meta_issues.is_nullsafe, Some(false));
    // Project beats defaults.
    assert_eq!(config.report.effective_format(), "console");

    clear_nullsafe_env_vars();
}

#[test]
fn test_user_config_is_lowest_file_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let home = isolated_home();

    let user_dir = home.path().join(".nullsafe");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[meta_issues]\nneeds_improvement = false\nis_nullsafe = true\n",
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("nullsafe.toml"), "[meta_issues]\nis_nullsafe = false\n").unwrap();

    let config = NullsafeConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.meta_issues.needs_improvement, Some(false));
    assert_eq!(config.meta_issues.is_nullsafe, Some(false));
}

#[test]
fn test_project_empty_suppressed_kinds_clears_user_list() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let home = isolated_home();

    let user_dir = home.path().join(".nullsafe");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[meta_issues]\nsuppressed_kinds = [\"field_not_initialized\"]\n",
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("nullsafe.toml"), "[meta_issues]\nsuppressed_kinds = []\n")
        .unwrap();

    let config = NullsafeConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.meta_issues.suppressed_kinds, Some(Vec::new()));
    assert!(config.meta_issues.effective_suppressed_kinds().is_empty());
}

#[test]
fn test_user_suppressed_kinds_survive_project_without_list() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let home = isolated_home();

    let user_dir = home.path().join(".nullsafe");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("config.toml"),
        "[meta_issues]\nsuppressed_kinds = [\"bad_assignment\"]\n",
    )
    .unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("nullsafe.toml"), "[meta_issues]\nis_nullsafe = true\n").unwrap();

    let config = NullsafeConfig::load(dir.path(), None).unwrap();
    assert_eq!(
        config.meta_issues.effective_suppressed_kinds(),
        ["bad_assignment".to_string()]
    );
}

#[test]
fn test_malformed_user_config_is_fatal() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let home = isolated_home();

    let user_dir = home.path().join(".nullsafe");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(user_dir.join("config.toml"), "[meta_issues\n").unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let err = NullsafeConfig::load(dir.path(), None).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_missing_files_fall_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let _home = isolated_home();

    let dir = tempfile::TempDir::new().unwrap();
    let config = NullsafeConfig::load(dir.path(), None).unwrap();

    assert!(config.meta_issues.effective_can_be_nullsafe());
    assert!(config.meta_issues.effective_needs_improvement());
    assert!(!config.meta_issues.effective_is_nullsafe());
    assert_eq!(config.report.effective_format(), "json");
    assert!(config.report.effective_use_color());
}

#[test]
fn test_invalid_env_values_are_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let _home = isolated_home();

    std::env::set_var("NULLSAFE_META_NEEDS_IMPROVEMENT", "maybe");
    let dir = tempfile::TempDir::new().unwrap();
    let config = NullsafeConfig::load(dir.path(), None).unwrap();
    assert_eq!(config.meta_issues.needs_improvement, None);

    clear_nullsafe_env_vars();
}

#[test]
fn test_cli_no_color() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_nullsafe_env_vars();
    let _home = isolated_home();

    let dir = tempfile::TempDir::new().unwrap();
    let cli = CliOverrides {
        no_color: true,
        ..Default::default()
    };
    let config = NullsafeConfig::load(dir.path(), Some(&cli)).unwrap();
    assert!(!config.report.effective_use_color());
}

#[test]
fn test_unknown_report_format_rejected() {
    let err = NullsafeConfig::from_toml("[report]\nformat = \"xml\"\n").unwrap_err();
    match err {
        ConfigError::ValidationFailed { field, .. } => assert_eq!(field, "report.format"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn test_unknown_suppressed_kind_rejected() {
    let err =
        NullsafeConfig::from_toml("[meta_issues]\nsuppressed_kinds = [\"null_pointer\"]\n")
            .unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
    assert!(err.code_string().starts_with("[CONFIG_ERROR]"));
}

#[test]
fn test_suppressed_kinds_parse() {
    let config = NullsafeConfig::from_toml(
        "[meta_issues]\nsuppressed_kinds = [\"field_not_initialized\", \"bad_assignment\"]\n",
    )
    .unwrap();
    assert_eq!(
        config.meta_issues.effective_suppressed_kinds(),
        ["field_not_initialized".to_string(), "bad_assignment".to_string()]
    );
}

#[test]
fn test_toml_round_trip_preserves_values() {
    let config = NullsafeConfig::from_toml("[meta_issues]\nis_nullsafe = true\n").unwrap();
    let rendered = config.to_toml().unwrap();
    let reparsed = NullsafeConfig::from_toml(&rendered).unwrap();
    assert_eq!(reparsed.meta_issues.is_nullsafe, Some(true));
}

#[test]
fn test_should_analyze_meta_issues_gate() {
    let all_off = MetaIssueConfig {
        can_be_nullsafe: Some(false),
        needs_improvement: Some(false),
        is_nullsafe: Some(false),
        suppressed_kinds: None,
    };
    assert!(!all_off.should_analyze_meta_issues());

    let only_is_nullsafe = MetaIssueConfig {
        is_nullsafe: Some(true),
        ..all_off.clone()
    };
    assert!(only_is_nullsafe.should_analyze_meta_issues());

    assert!(MetaIssueConfig::default().should_analyze_meta_issues());
}

#[test]
fn test_is_kind_enabled() {
    let config = MetaIssueConfig::default();
    assert!(config.is_kind_enabled("meta_class_can_be_nullsafe"));
    assert!(config.is_kind_enabled("meta_class_needs_improvement"));
    assert!(!config.is_kind_enabled("meta_class_is_nullsafe"));
    assert!(!config.is_kind_enabled("nullable_dereference"));
}
