//! Defaults applied when building response envelopes

use crate::error::ConfigResult;
use crate::validation::Validatable;
use serde::{Deserialize, Serialize};

/// Envelope configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    /// Add a `statusCode` field to catalog-driven envelopes
    #[serde(default = "crate::domains::utils::default_false")]
    pub include_status_code: bool,
}

impl Validatable for EnvelopeConfig {
    fn validate(&self) -> ConfigResult<()> {
        Ok(())
    }

    fn domain_name(&self) -> &'static str {
        "envelope"
    }
}
