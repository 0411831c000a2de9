//! Backend traits for the media provider.
//!
//! These traits define the seams between the retrieval gateway and the
//! concrete provider protocol, enabling pluggable backends and testability.
//! Implementations are expected to bound every call with their configured
//! per-call timeout; callers treat a timeout like any other recoverable
//! provider failure.

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::Result;
use crate::models::{Group, RawAsset};

/// Expression-based search over the provider's search API.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    /// Execute a search expression, sorted by creation time descending,
    /// with the custom-context field selected, capped at `limit` results.
    ///
    /// Returns the provider's raw resource list; an empty list is a valid
    /// success, not an error.
    async fn search(&self, expression: &str, limit: u32) -> Result<Vec<RawAsset>>;
}

/// Prefix-based enumeration over the provider's listing API.
#[async_trait]
pub trait ListingBackend: Send + Sync {
    /// List uploaded assets whose identifier starts with `prefix`, or the
    /// most recent uploads when `prefix` is `None`. Capped at `limit`.
    async fn list(&self, prefix: Option<&str>, limit: u32) -> Result<Vec<RawAsset>>;

    /// Enumerate top-level groupings (provider folders).
    async fn root_groups(&self) -> Result<Vec<Group>>;
}

/// Provider connectivity diagnostics.
#[async_trait]
pub trait DiagnosticsBackend: Send + Sync {
    /// Ping the provider, returning its diagnostic payload verbatim.
    async fn ping(&self) -> Result<JsonValue>;
}
