//! System endpoints: index page, health, provider ping, group listing.

use axum::{extract::State, response::Html, Json};
use serde::Serialize;
use serde_json::Value as JsonValue;

use aperture_core::{DiagnosticsBackend, Group, ListingBackend};

use super::ApiError;
use crate::AppState;

/// `GET /` — tiny HTML index for clicking around during development.
pub async fn index() -> Html<&'static str> {
    Html(
        r#"<h3>OK</h3>
<ul>
  <li><a href="/health">/health</a></li>
  <li><a href="/health/ping">/health/ping</a></li>
  <li><a href="/groups">/groups</a></li>
  <li><a href="/assets">/assets</a></li>
  <li><a href="/assets?category=landscape">/assets?category=landscape</a></li>
</ul>
"#,
    )
}

/// `GET /health` — liveness only, no outbound calls.
pub async fn health() -> Json<JsonValue> {
    Json(serde_json::json!({ "ok": true, "server": "up" }))
}

/// Response for the provider ping diagnostic.
#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub ping: JsonValue,
}

/// `GET /health/ping` — round-trip to the provider.
pub async fn provider_ping(State(state): State<AppState>) -> Result<Json<PingResponse>, ApiError> {
    let ping = state.gateway.backend().ping().await?;
    Ok(Json(PingResponse { ok: true, ping }))
}

/// Response for the top-level group listing.
#[derive(Debug, Serialize)]
pub struct GroupsResponse {
    pub ok: bool,
    pub groups: Vec<Group>,
}

/// `GET /groups` — top-level groupings, helps confirm exact names and case.
pub async fn list_groups(State(state): State<AppState>) -> Result<Json<GroupsResponse>, ApiError> {
    let groups = state.gateway.backend().root_groups().await?;
    Ok(Json(GroupsResponse { ok: true, groups }))
}
