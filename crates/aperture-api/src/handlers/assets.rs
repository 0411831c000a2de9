//! The asset-list endpoint: the HTTP face of the retrieval gateway.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;

use aperture_core::{AssetQuery, RetrievalResult};

use super::ApiError;
use crate::AppState;

/// Query parameters for `GET /assets`.
#[derive(Debug, Deserialize)]
pub struct AssetsParams {
    /// Case-sensitive group (folder) name.
    pub category: Option<String>,
    /// Result cap, clamped to the configured maximum.
    pub limit: Option<u32>,
}

/// `GET /assets?category=<CaseSensitive>&limit=60`
pub async fn list_assets(
    State(state): State<AppState>,
    Query(params): Query<AssetsParams>,
) -> Result<Json<RetrievalResult>, ApiError> {
    let query = AssetQuery::new(params.category.as_deref(), params.limit);
    debug!(
        category = query.category.as_deref().unwrap_or("(none)"),
        limit = query.limit,
        "Asset retrieval requested"
    );

    let result = state.gateway.retrieve(&query).await?;
    Ok(Json(result))
}
