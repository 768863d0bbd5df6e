//! Observability for Nullsafe.
//! `tracing` crate with `EnvFilter`, levels read from `NULLSAFE_LOG`.

pub mod setup;

pub use setup::init_tracing;
