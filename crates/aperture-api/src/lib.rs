//! HTTP API boundary for the aperture media gateway.
//!
//! Exposes the router and application state so integration tests can mount
//! the app without the binary. The boundary owns the cross-cutting layers:
//! request tracing, UUIDv7 request ids, wildcard-origin CORS for the public
//! GET endpoints, and an outer response deadline that turns a hung request
//! into a well-formed 504 envelope instead of leaving the caller waiting.

pub mod handlers;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::warn;
use uuid::Uuid;

use aperture_core::defaults::RESPONSE_DEADLINE_SECS;
use aperture_provider::{AssetGateway, CloudinaryBackend};

/// Generates time-ordered UUIDv7 request correlation IDs.
///
/// UUIDv7 embeds a Unix timestamp, so IDs sort chronologically — useful for
/// log correlation when chasing slow provider calls through the cascade.
#[derive(Clone, Default)]
struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// The retrieval gateway; its backend also serves the diagnostics and
    /// group-listing endpoints.
    pub gateway: Arc<AssetGateway<CloudinaryBackend>>,
    /// Outer response deadline for every request.
    pub response_deadline: Duration,
}

impl AppState {
    pub fn new(gateway: AssetGateway<CloudinaryBackend>) -> Self {
        Self {
            gateway: Arc::new(gateway),
            response_deadline: Duration::from_secs(RESPONSE_DEADLINE_SECS),
        }
    }

    /// Override the response deadline (tests use a short one).
    pub fn with_response_deadline(mut self, deadline: Duration) -> Self {
        self.response_deadline = deadline;
        self
    }
}

/// Turn a request that outlives the configured deadline into a structured
/// 504 envelope. The dropped handler future abandons any in-flight provider
/// calls.
async fn enforce_response_deadline(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    match tokio::time::timeout(state.response_deadline, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            warn!(method = %method, uri = %uri, "Response deadline exceeded");
            (
                StatusCode::GATEWAY_TIMEOUT,
                Json(serde_json::json!({ "ok": false, "error": "Gateway Timeout" })),
            )
                .into_response()
        }
    }
}

/// Build the application router with all layers applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::system::index))
        .route("/assets", get(handlers::assets::list_assets))
        .route("/groups", get(handlers::system::list_groups))
        .route("/health", get(handlers::system::health))
        .route("/health/ping", get(handlers::system::provider_ping))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            enforce_response_deadline,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        // Public read-only surface: any origin, GET only.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .with_state(state)
}
