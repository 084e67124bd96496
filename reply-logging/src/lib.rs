//! Logging setup for hosts embedding the reply web helpers
//!
//! Everything in the workspace logs through `tracing`; this crate installs
//! the subscriber described by a [`reply_config::LoggingConfig`].

pub mod init;

pub use init::{env_filter, fmt_layer, init_logging_from_config, init_simple_tracing};
