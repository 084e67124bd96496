//! Domain-driven configuration for the reply web helpers
//!
//! Each functional area (server, logging, CORS, body parsing, assets,
//! envelopes) has its own validated configuration domain. [`ConfigLoader`]
//! reads YAML and applies `REPLY_*` environment overrides.

pub mod domains;
pub mod error;
pub mod loader;
pub mod validation;

pub use domains::{
    assets::AssetsConfig,
    body::BodyConfig,
    cors::CorsConfig,
    envelope::EnvelopeConfig,
    logging::{LogFormat, LogLevel, LoggingConfig},
    server::ServerConfig,
    WebConfig,
};
pub use error::{ConfigError, ConfigResult};
pub use loader::ConfigLoader;
pub use validation::Validatable;
