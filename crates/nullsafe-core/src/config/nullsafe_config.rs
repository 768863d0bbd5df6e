//! Top-level Nullsafe configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{MetaIssueConfig, ReportConfig};
use crate::constants::{FINDING_KINDS, PROJECT_CONFIG_FILE, REPORT_FORMATS};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`NULLSAFE_*`)
/// 3. Project config (`nullsafe.toml` in project root)
/// 4. User config (`~/.nullsafe/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct NullsafeConfig {
    pub meta_issues: MetaIssueConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub can_be_nullsafe: Option<bool>,
    pub needs_improvement: Option<bool>,
    pub is_nullsafe: Option<bool>,
    pub report_format: Option<String>,
    pub no_color: bool,
}

impl NullsafeConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config. Only a malformed file is fatal.
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &NullsafeConfig) -> Result<(), ConfigError> {
        if let Some(ref format) = config.report.format {
            if !REPORT_FORMATS.contains(&format.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "report.format".to_string(),
                    message: format!(
                        "unknown format `{format}` (expected one of: {})",
                        REPORT_FORMATS.join(", ")
                    ),
                });
            }
        }
        for kind in config.meta_issues.effective_suppressed_kinds() {
            if !FINDING_KINDS.contains(&kind.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "meta_issues.suppressed_kinds".to_string(),
                    message: format!("unknown finding kind `{kind}`"),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.nullsafe/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".nullsafe").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut NullsafeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: NullsafeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut NullsafeConfig, other: &NullsafeConfig) {
        if other.meta_issues.can_be_nullsafe.is_some() {
            base.meta_issues.can_be_nullsafe = other.meta_issues.can_be_nullsafe;
        }
        if other.meta_issues.needs_improvement.is_some() {
            base.meta_issues.needs_improvement = other.meta_issues.needs_improvement;
        }
        if other.meta_issues.is_nullsafe.is_some() {
            base.meta_issues.is_nullsafe = other.meta_issues.is_nullsafe;
        }
        if other.meta_issues.suppressed_kinds.is_some() {
            base.meta_issues.suppressed_kinds = other.meta_issues.suppressed_kinds.clone();
        }

        if other.report.format.is_some() {
            base.report.format = other.report.format.clone();
        }
        if other.report.use_color.is_some() {
            base.report.use_color = other.report.use_color;
        }
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut NullsafeConfig) {
        if let Some(v) = env_bool("NULLSAFE_META_CAN_BE_NULLSAFE") {
            config.meta_issues.can_be_nullsafe = Some(v);
        }
        if let Some(v) = env_bool("NULLSAFE_META_NEEDS_IMPROVEMENT") {
            config.meta_issues.needs_improvement = Some(v);
        }
        if let Some(v) = env_bool("NULLSAFE_META_IS_NULLSAFE") {
            config.meta_issues.is_nullsafe = Some(v);
        }
        if let Ok(val) = std::env::var("NULLSAFE_REPORT_FORMAT") {
            config.report.format = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut NullsafeConfig, cli: &CliOverrides) {
        if let Some(v) = cli.can_be_nullsafe {
            config.meta_issues.can_be_nullsafe = Some(v);
        }
        if let Some(v) = cli.needs_improvement {
            config.meta_issues.needs_improvement = Some(v);
        }
        if let Some(v) = cli.is_nullsafe {
            config.meta_issues.is_nullsafe = Some(v);
        }
        if let Some(ref v) = cli.report_format {
            config.report.format = Some(v.clone());
        }
        if cli.no_color {
            config.report.use_color = Some(false);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_bool(key: &str) -> Option<bool> {
    std::env::var(key).ok().and_then(|v| v.parse::<bool>().ok())
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
