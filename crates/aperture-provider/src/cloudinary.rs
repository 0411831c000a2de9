//! Cloudinary media provider backend.
//!
//! Implements the core backend traits over Cloudinary's Search API
//! (expression queries) and Admin API (prefix listing, folders, ping).
//! Every call is HTTP-basic authenticated with the configured key/secret
//! and bounded by a per-request timeout; a timed-out call is abandoned by
//! dropping the in-flight future.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use tracing::{debug, info, instrument, warn};

use aperture_core::defaults::{GROUPS_TIMEOUT_SECS, PING_TIMEOUT_SECS};
use aperture_core::{
    DiagnosticsBackend, Error, Group, ListingBackend, RawAsset, Result, SearchBackend,
};

use crate::config::ProviderConfig;

/// Cloudinary backend over the provider's REST surface.
pub struct CloudinaryBackend {
    client: Client,
    config: ProviderConfig,
}

impl CloudinaryBackend {
    /// Create a backend from an explicit configuration.
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.call_timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to create HTTP client: {}", e)))?;

        info!(
            cloud_name = %config.cloud_name,
            api_base = %config.api_base,
            "Initializing Cloudinary backend"
        );

        Ok(Self { client, config })
    }

    /// Create from environment variables. Fails fast when a credential or
    /// the account identifier is missing.
    pub fn from_env() -> Result<Self> {
        Self::new(ProviderConfig::from_env()?)
    }

    /// The configured account identifier.
    pub fn cloud_name(&self) -> &str {
        &self.config.cloud_name
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.api_base, self.config.cloud_name, path
        )
    }

    /// Check a provider response status and decode the JSON body, mapping
    /// non-2xx responses to [`Error::Provider`] with status and body.
    async fn decode<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Provider(format!("{}: {}", status, body)));
        }
        response
            .json()
            .await
            .map_err(|e| Error::Serialization(format!("Failed to parse response: {}", e)))
    }
}

/// Request payload for the Cloudinary Search API.
#[derive(Serialize)]
struct SearchRequest {
    expression: String,
    sort_by: Vec<JsonValue>,
    with_field: Vec<&'static str>,
    max_results: u32,
}

/// Resource list shared by the Search and Admin API responses.
#[derive(Deserialize)]
struct ResourcesResponse {
    #[serde(default)]
    resources: Vec<RawAsset>,
}

/// Response from the Admin API folders endpoint.
#[derive(Deserialize)]
struct FoldersResponse {
    #[serde(default)]
    folders: Vec<Group>,
}

#[async_trait]
impl SearchBackend for CloudinaryBackend {
    #[instrument(skip(self, expression), fields(subsystem = "provider", component = "cloudinary", op = "search", expression = %expression))]
    async fn search(&self, expression: &str, limit: u32) -> Result<Vec<RawAsset>> {
        let start = Instant::now();

        let request = SearchRequest {
            expression: expression.to_string(),
            sort_by: vec![serde_json::json!({ "created_at": "desc" })],
            with_field: vec!["context"],
            max_results: limit,
        };

        let response = self
            .client
            .post(self.url("resources/search"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .timeout(self.config.call_timeout)
            .json(&request)
            .send()
            .await?;

        let result: ResourcesResponse = Self::decode(response).await?;
        debug!(
            result_count = result.resources.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Search complete"
        );
        Ok(result.resources)
    }
}

#[async_trait]
impl ListingBackend for CloudinaryBackend {
    #[instrument(skip(self, prefix), fields(subsystem = "provider", component = "cloudinary", op = "list", prefix = prefix.unwrap_or("(recent)")))]
    async fn list(&self, prefix: Option<&str>, limit: u32) -> Result<Vec<RawAsset>> {
        let start = Instant::now();

        let mut query: Vec<(&str, String)> = vec![
            ("max_results", limit.to_string()),
            ("context", "true".to_string()),
        ];
        if let Some(prefix) = prefix {
            query.push(("prefix", prefix.to_string()));
        }

        let response = self
            .client
            .get(self.url("resources/image/upload"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .timeout(self.config.call_timeout)
            .query(&query)
            .send()
            .await?;

        let result: ResourcesResponse = Self::decode(response).await?;
        debug!(
            result_count = result.resources.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Listing complete"
        );
        Ok(result.resources)
    }

    #[instrument(skip(self), fields(subsystem = "provider", component = "cloudinary", op = "root_groups"))]
    async fn root_groups(&self) -> Result<Vec<Group>> {
        let response = self
            .client
            .get(self.url("folders"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .timeout(Duration::from_secs(GROUPS_TIMEOUT_SECS))
            .send()
            .await?;

        let result: FoldersResponse = Self::decode(response).await?;
        debug!(result_count = result.folders.len(), "Groups listed");
        Ok(result.folders)
    }
}

#[async_trait]
impl DiagnosticsBackend for CloudinaryBackend {
    async fn ping(&self) -> Result<JsonValue> {
        let response = self
            .client
            .get(self.url("ping"))
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .timeout(Duration::from_secs(PING_TIMEOUT_SECS))
            .send()
            .await;

        match response {
            Ok(resp) => Self::decode(resp).await,
            Err(e) => {
                warn!(error = %e, "Provider ping failed");
                Err(e.into())
            }
        }
    }
}
