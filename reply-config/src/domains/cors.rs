//! Cross-origin resource sharing configuration

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Wildcard origin accepted in `allowed_origins`
pub const ANY_ORIGIN: &str = "*";

/// CORS configuration
///
/// The defaults mirror a bare `cors()` middleware: any origin, the common
/// verbs, no credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins (`"*"` for any origin)
    #[serde(default = "default_cors_origins")]
    pub allowed_origins: Vec<String>,

    /// Allowed methods
    #[serde(default = "default_cors_methods")]
    pub allowed_methods: Vec<String>,

    /// Allowed request headers
    #[serde(default = "default_cors_headers")]
    pub allowed_headers: Vec<String>,

    /// Response headers exposed to the browser
    #[serde(default)]
    pub expose_headers: Vec<String>,

    /// Whether to allow credentials
    #[serde(default = "crate::domains::utils::default_false")]
    pub allow_credentials: bool,

    /// Max age for preflight requests
    #[serde(
        with = "crate::domains::utils::serde_duration",
        default = "default_cors_max_age"
    )]
    pub max_age: Duration,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_cors_origins(),
            allowed_methods: default_cors_methods(),
            allowed_headers: default_cors_headers(),
            expose_headers: Vec::new(),
            allow_credentials: false,
            max_age: default_cors_max_age(),
        }
    }
}

impl CorsConfig {
    /// Restrict to an explicit origin list and allow credentials
    pub fn with_origins(origins: Vec<String>) -> Self {
        Self {
            allowed_origins: origins,
            allow_credentials: true,
            ..Default::default()
        }
    }

    /// Whether any origin is allowed
    pub fn allows_any_origin(&self) -> bool {
        self.allowed_origins.iter().any(|o| o == ANY_ORIGIN)
    }
}

impl Validatable for CorsConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.allowed_origins.is_empty() {
            return Err(self.validation_error("allowed_origins cannot be empty"));
        }

        if self.allows_any_origin() && self.allow_credentials {
            return Err(self.validation_error(
                "Cannot use wildcard origin '*' with allow_credentials: true",
            ));
        }

        if self.allowed_methods.is_empty() {
            return Err(self.validation_error("allowed_methods cannot be empty"));
        }

        if self.allow_credentials {
            let wildcard_lists = [
                ("allowed_methods", &self.allowed_methods),
                ("allowed_headers", &self.allowed_headers),
                ("expose_headers", &self.expose_headers),
            ];
            for (field, values) in wildcard_lists {
                if values.iter().any(|value| value.trim() == "*") {
                    return Err(self.validation_error(format!(
                        "Cannot use wildcard '*' in {} with allow_credentials: true",
                        field
                    )));
                }
            }
        }

        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "cors"
    }
}

fn default_cors_origins() -> Vec<String> {
    vec![ANY_ORIGIN.to_string()]
}

fn default_cors_methods() -> Vec<String> {
    ["GET", "HEAD", "PUT", "PATCH", "POST", "DELETE"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_cors_headers() -> Vec<String> {
    [
        "content-type",
        "authorization",
        "accept",
        "x-requested-with",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect()
}

fn default_cors_max_age() -> Duration {
    Duration::from_secs(3600)
}
