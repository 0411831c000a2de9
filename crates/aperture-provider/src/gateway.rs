//! The Asset Retrieval Gateway: a strategy cascade over the provider.
//!
//! The provider's query grammar is inconsistent across literal-quoting styles
//! and some content lacks the structured grouping attribute used for primary
//! filtering. The gateway therefore issues an ordered sequence of search
//! expression variants, short-circuiting on the first non-empty result, and
//! falls back to prefix-based listing so assets stay discoverable even when
//! advanced querying is disabled or misconfigured on the account tier.
//!
//! Variants run sequentially, never concurrently: a deliberate latency/cost
//! trade-off that avoids speculative provider billing. Every call is bounded
//! by the backend's per-call timeout, so the worst case before the fallback
//! is `variants × timeout`. A timed-out variant is not retried, only
//! superseded by the next one.

use std::time::Instant;

use tracing::{debug, info, instrument, warn};

use aperture_core::defaults::MAX_SEARCH_VARIANTS;
use aperture_core::{
    AssetQuery, AssetRecord, Error, ListingBackend, RawAsset, Result, RetrievalResult,
    SearchBackend, Strategy,
};

use crate::normalize::normalize;

/// Base filter: assets of the expected media kind, in the uploaded state.
const BASE_FILTER: &str = "resource_type:image AND type:upload";

/// Build the ordered search expression variants for a category.
///
/// - variant A: plain grouping-field equality (`folder:name`);
/// - variant B: quoted-literal form (`folder="name"`) — the provider's
///   grammar treats quoted and unquoted string literals differently;
/// - variant C: identifier-prefix glob (`public_id:name/*`) — some assets
///   carry no grouping attribute and are only discoverable by id prefix.
///
/// Without a category only the bare base filter is issued.
pub fn search_expressions(category: Option<&str>) -> Vec<(String, Strategy)> {
    match category {
        None => vec![(BASE_FILTER.to_string(), Strategy::SearchPrimary)],
        Some(category) => vec![
            (
                format!("{} AND folder:{}", BASE_FILTER, category),
                Strategy::SearchPrimary,
            ),
            (
                format!("{} AND folder=\"{}\"", BASE_FILTER, category),
                Strategy::SearchAlternate,
            ),
            (
                format!("{} AND public_id:{}/*", BASE_FILTER, category),
                Strategy::SearchAlternate,
            ),
        ],
    }
}

/// Stateless retrieval gateway over a search-capable and listing-capable
/// provider backend. Each call is independent; nothing persists between
/// retrievals.
pub struct AssetGateway<B> {
    backend: B,
}

impl<B> AssetGateway<B>
where
    B: SearchBackend + ListingBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// The underlying provider backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Execute the strategy cascade for a query.
    ///
    /// Returns the first non-empty normalized result. All strategy-level
    /// failures are absorbed; only the terminal outcome surfaces:
    /// `Error::NotFound` when every strategy executed and nothing matched,
    /// or the listing fallback's own error when the final strategy failed.
    #[instrument(skip(self, query), fields(subsystem = "gateway", component = "cascade", op = "retrieve", category = query.category.as_deref().unwrap_or("(none)"), limit = query.limit))]
    pub async fn retrieve(&self, query: &AssetQuery) -> Result<RetrievalResult> {
        let start = Instant::now();
        let variants = search_expressions(query.category.as_deref());
        debug_assert!(variants.len() <= MAX_SEARCH_VARIANTS);

        for (expression, strategy) in &variants {
            match self.backend.search(expression, query.limit).await {
                Ok(raw) => {
                    let records = normalize_batch(raw);
                    if !records.is_empty() {
                        return Ok(finish(query, *strategy, records, start));
                    }
                    debug!(expression = %expression, "Search variant returned no records");
                }
                Err(e) => {
                    warn!(
                        expression = %expression,
                        error = %e,
                        "Search variant failed, continuing cascade"
                    );
                }
            }
        }

        let prefix = query.category.as_ref().map(|c| format!("{}/", c));
        match self.backend.list(prefix.as_deref(), query.limit).await {
            Ok(raw) => {
                let records = normalize_batch(raw);
                if !records.is_empty() {
                    return Ok(finish(query, Strategy::ListingFallback, records, start));
                }
            }
            Err(e) => {
                warn!(error = %e, "Listing fallback failed, cascade exhausted");
                return Err(e);
            }
        }

        Err(Error::NotFound {
            hint: not_found_hint(query.category.as_deref()),
        })
    }
}

/// Normalize a raw batch, dropping records that do not satisfy the strict
/// shape. A malformed provider record never fails the retrieval.
fn normalize_batch(raw: Vec<RawAsset>) -> Vec<AssetRecord> {
    let total = raw.len();
    let records: Vec<AssetRecord> = raw.into_iter().filter_map(normalize).collect();
    if records.len() < total {
        debug!(
            dropped = total - records.len(),
            kept = records.len(),
            "Dropped malformed provider records"
        );
    }
    records
}

fn finish(
    query: &AssetQuery,
    strategy: Strategy,
    mut records: Vec<AssetRecord>,
    start: Instant,
) -> RetrievalResult {
    // The search API sorts server-side but the listing API does not
    // guarantee it. Order here so every strategy honors the contract.
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    info!(
        strategy = %strategy,
        result_count = records.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "Retrieval served"
    );
    RetrievalResult::new(query.category.clone(), strategy, records)
}

fn not_found_hint(category: Option<&str>) -> String {
    match category {
        Some(_) => {
            "Check the exact folder name (case-sensitive) or ensure that folder has images."
                .to_string()
        }
        None => "Your account may have no uploaded images. Upload some and try again.".to_string(),
    }
}
