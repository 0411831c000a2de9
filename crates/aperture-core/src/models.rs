//! Data model for asset retrieval: query input, normalized records, and the
//! response envelope.
//!
//! Everything here is request-scoped. Nothing persists between retrievals and
//! no caching layer is assumed.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::defaults::{DEFAULT_LIMIT, MAX_LIMIT};

/// Attribute keys that are always present on a normalized record, mapped to
/// null when the provider carries no value for them.
pub const WELL_KNOWN_ATTRIBUTES: [&str; 4] = ["title", "location", "category", "camera_settings"];

/// Input to the Asset Retrieval Gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetQuery {
    /// Case-sensitive scoping token (a provider folder name). `None` means
    /// no scoping.
    pub category: Option<String>,
    /// Maximum number of records to retrieve. Clamped to [`MAX_LIMIT`].
    pub limit: u32,
}

impl AssetQuery {
    /// Build a query, trimming the category (empty normalizes to `None`) and
    /// clamping the limit to the configured maximum.
    pub fn new(category: Option<&str>, limit: Option<u32>) -> Self {
        let category = category
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(ToString::to_string);
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
        Self { category, limit }
    }

    /// Query with no scoping and the default limit.
    pub fn unscoped() -> Self {
        Self::new(None, None)
    }
}

impl Default for AssetQuery {
    fn default() -> Self {
        Self::unscoped()
    }
}

/// Pixel dimensions of an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

/// Normalized output unit: one media asset in a provider-independent shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Stable identifier from the provider.
    pub id: String,
    /// Direct retrieval URL for the full asset.
    pub url: String,
    /// Pixel dimensions, when the provider reported both.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    /// Hierarchical grouping, from the provider's grouping field or derived
    /// from the identifier's path prefix. Empty for ungrouped assets.
    pub group_path: String,
    /// Provider-reported creation time.
    pub created_at: DateTime<Utc>,
    /// Free-form metadata from the provider's custom context. The
    /// [`WELL_KNOWN_ATTRIBUTES`] keys are always present, null when unset.
    pub attributes: BTreeMap<String, Option<String>>,
}

/// Which retrieval strategy produced a result. Provenance metadata for
/// observability only, never consulted for correctness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Strategy {
    /// Plain grouping-field equality search (or the bare base filter when
    /// no category was supplied).
    SearchPrimary,
    /// Quoted-literal or identifier-prefix search variant.
    SearchAlternate,
    /// Prefix-based listing on the provider's enumeration API.
    ListingFallback,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SearchPrimary => write!(f, "searchPrimary"),
            Self::SearchAlternate => write!(f, "searchAlternate"),
            Self::ListingFallback => write!(f, "listingFallback"),
        }
    }
}

/// Successful response envelope for a retrieval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievalResult {
    pub ok: bool,
    pub count: usize,
    /// Echo of the query category, null when the query was unscoped.
    pub category: Option<String>,
    pub strategy: Strategy,
    /// Records sorted by `created_at` descending.
    pub records: Vec<AssetRecord>,
}

impl RetrievalResult {
    /// Build a successful envelope from normalized records.
    pub fn new(category: Option<String>, strategy: Strategy, records: Vec<AssetRecord>) -> Self {
        Self {
            ok: true,
            count: records.len(),
            category,
            strategy,
            records,
        }
    }
}

/// A top-level grouping (provider folder) entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub path: String,
}

// =============================================================================
// RAW PROVIDER SHAPES
// =============================================================================

/// Loosely-shaped asset as returned by the provider. Every field is optional
/// so that a partial or malformed provider record deserializes instead of
/// failing the whole response; normalization decides what to keep.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawAsset {
    #[serde(default)]
    pub public_id: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub context: Option<RawContext>,
}

/// Nested custom-context block on a provider record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContext {
    #[serde(default)]
    pub custom: Option<BTreeMap<String, serde_json::Value>>,
}
