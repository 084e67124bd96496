//! Domain-specific configuration modules

pub mod assets;
pub mod body;
pub mod cors;
pub mod envelope;
pub mod logging;
pub mod server;
pub mod utils;

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Complete configuration combining all domains
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WebConfig {
    /// Listener configuration
    #[serde(default)]
    pub server: server::ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: logging::LoggingConfig,

    /// CORS configuration
    #[serde(default)]
    pub cors: cors::CorsConfig,

    /// Request body limits
    #[serde(default)]
    pub body: body::BodyConfig,

    /// Static files and views
    #[serde(default)]
    pub assets: assets::AssetsConfig,

    /// Envelope defaults
    #[serde(default)]
    pub envelope: envelope::EnvelopeConfig,
}

impl WebConfig {
    /// Validate all domain configurations
    pub fn validate_all(&self) -> ConfigResult<()> {
        self.server.validate()?;
        self.logging.validate()?;
        self.cors.validate()?;
        self.body.validate()?;
        self.assets.validate()?;
        self.envelope.validate()?;
        Ok(())
    }

    /// Generate a sample configuration file
    pub fn generate_sample() -> String {
        let config = WebConfig::default();
        serde_yaml::to_string(&config)
            .unwrap_or_else(|_| "# Failed to generate sample config".to_string())
    }
}
