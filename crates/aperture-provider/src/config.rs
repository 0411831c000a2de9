//! Provider configuration.
//!
//! Credentials and the account identifier are gathered into an explicit
//! struct passed to the backend at construction. A missing credential fails
//! fast with [`Error::Config`] before any network I/O; the gateway never
//! proceeds with an anonymous provider call.

use std::env;
use std::time::Duration;

use aperture_core::defaults::CALL_TIMEOUT_SECS;
use aperture_core::{Error, Result};
use tracing::debug;

/// Default API root for the hosted provider.
pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com/v1_1";

/// Configuration for the Cloudinary media provider.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider account identifier (the "cloud name").
    pub cloud_name: String,
    /// API access key.
    pub api_key: String,
    /// API access secret.
    pub api_secret: String,
    /// API root URL, overridable for tests against a local stub.
    pub api_base: String,
    /// Per-call timeout for search and listing requests.
    pub call_timeout: Duration,
}

impl ProviderConfig {
    /// Build a configuration from explicit values.
    pub fn new(
        cloud_name: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            cloud_name: cloud_name.into(),
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            call_timeout: Duration::from_secs(CALL_TIMEOUT_SECS),
        }
    }

    /// Override the API root (used by tests to point at a stub server).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the per-call timeout.
    pub fn with_call_timeout(mut self, timeout: Duration) -> Self {
        self.call_timeout = timeout;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Required: `CLOUDINARY_CLOUD_NAME`, `CLOUDINARY_API_KEY`,
    /// `CLOUDINARY_API_SECRET`. Optional: `CLOUDINARY_API_BASE`,
    /// `APERTURE_CALL_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self> {
        let cloud_name = require_var("CLOUDINARY_CLOUD_NAME")?;
        let api_key = require_var("CLOUDINARY_API_KEY")?;
        let api_secret = require_var("CLOUDINARY_API_SECRET")?;

        let mut config = Self::new(cloud_name, api_key, api_secret);

        if let Ok(base) = env::var("CLOUDINARY_API_BASE") {
            if !base.trim().is_empty() {
                config.api_base = base.trim_end_matches('/').to_string();
            }
        }
        if let Some(secs) = env::var("APERTURE_CALL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config.call_timeout = Duration::from_secs(secs);
        }

        debug!(
            cloud_name = %config.cloud_name,
            api_base = %config.api_base,
            call_timeout_secs = config.call_timeout.as_secs(),
            "Provider configuration loaded"
        );
        Ok(config)
    }
}

fn require_var(name: &str) -> Result<String> {
    match env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(Error::Config(format!("{} is not set", name))),
    }
}
