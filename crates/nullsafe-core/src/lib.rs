//! nullsafe-core: shared foundation for the Nullsafe meta-issue engine.
//!
//! - Errors: one `thiserror` enum per subsystem with stable error codes
//! - Config: TOML configuration with layered resolution
//! - Tracing: `tracing-subscriber` setup driven by `NULLSAFE_LOG`
//! - Constants: vocabularies shared between config validation and analysis

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
