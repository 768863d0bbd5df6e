//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the Nullsafe tracing/logging system.
///
/// Reads the `NULLSAFE_LOG` environment variable for per-module log levels.
/// Format: `NULLSAFE_LOG=nullsafe_analysis::aggregator=debug`
///
/// Falls back to `nullsafe=info` if `NULLSAFE_LOG` is not set or is invalid.
/// Idempotent; later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("nullsafe=info"));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
