//! Request body parsing limits

use crate::error::ConfigResult;
use crate::validation::{validate_positive, Validatable};
use serde::{Deserialize, Serialize};

/// Request body configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BodyConfig {
    /// Maximum accepted request body size in bytes
    #[serde(default = "default_limit_bytes")]
    pub limit_bytes: usize,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            limit_bytes: default_limit_bytes(),
        }
    }
}

impl Validatable for BodyConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_positive(self.limit_bytes, "limit_bytes", self.domain_name())
    }

    fn domain_name(&self) -> &'static str {
        "body"
    }
}

// 100kb, the usual JSON body parser default
fn default_limit_bytes() -> usize {
    100 * 1024
}
