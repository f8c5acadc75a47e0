//! HTTP server implementation using axum.

use axum::extract::{MatchedPath, State};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde_json::Value;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::{info, warn};

use mfe_telemetry::Metrics;

use crate::config::DashboardConfig;
use crate::state::DashboardState;
use crate::types::{HealthResponse, PanelSnapshot, SnapshotVariant};

/// Create the axum router.
///
/// Every response, static files included, carries no-store cache headers.
pub fn create_router(state: DashboardState, config: &DashboardConfig) -> Router {
    Router::new()
        .route_service("/", ServeFile::new(config.index_path()))
        .route_service("/top10", ServeFile::new(config.top10_page_path()))
        .route("/health", get(health))
        .route("/api/entrada", get(get_entrada))
        .route("/api/mfe", get(get_entrada))
        .route("/api/painel", get(get_painel))
        .route("/api/top10", get(get_top10))
        .route("/metrics", get(get_metrics))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .with_state(state)
}

async fn health(State(state): State<DashboardState>) -> Json<HealthResponse> {
    Json(state.health())
}

/// Normalized records, zone/risk/priority as written by the worker.
async fn get_entrada(
    State(state): State<DashboardState>,
    path: MatchedPath,
) -> Json<PanelSnapshot> {
    Metrics::request(path.as_str());
    Json(state.collect_snapshot(SnapshotVariant::Plain).await)
}

/// Records with derived risk, zone and priority.
async fn get_painel(
    State(state): State<DashboardState>,
    path: MatchedPath,
) -> Json<PanelSnapshot> {
    Metrics::request(path.as_str());
    Json(state.collect_snapshot(SnapshotVariant::Classified).await)
}

async fn get_top10(State(state): State<DashboardState>, path: MatchedPath) -> Json<Value> {
    Metrics::request(path.as_str());
    Json(state.top10().await)
}

async fn get_metrics() -> Response {
    match Metrics::render() {
        Ok(body) => (
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            body,
        )
            .into_response(),
        Err(e) => {
            warn!(error = %e, "Failed to render metrics");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Run the panel server until it fails.
pub async fn run_server(state: DashboardState, config: DashboardConfig) -> std::io::Result<()> {
    let app = create_router(state, &config);

    let addr = config.socket_addr();
    info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "Starting panel server"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await
}
