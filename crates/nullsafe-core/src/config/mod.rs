//! Configuration system for Nullsafe.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod meta_issue_config;
pub mod nullsafe_config;
pub mod report_config;

pub use meta_issue_config::MetaIssueConfig;
pub use nullsafe_config::{CliOverrides, NullsafeConfig};
pub use report_config::ReportConfig;
