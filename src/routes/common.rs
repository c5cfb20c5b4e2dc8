//! Common routes: sitemap, health, readiness, version, and the JSON 404 fallback.

use crate::response::error_body;
use crate::routes::entity::ENTITY_ROUTES;
use crate::state::AppState;
use crate::store::Backend;
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

/// Operational routes, listed by the sitemap after the inventory routes.
const COMMON_ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/ready"),
    ("GET", "/version"),
];

#[derive(Serialize)]
pub struct RouteInfo {
    pub method: &'static str,
    pub path: &'static str,
}

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    database: &'static str,
    backend: &'static str,
}

async fn sitemap() -> Json<Vec<RouteInfo>> {
    Json(sitemap_entries())
}

pub fn sitemap_entries() -> Vec<RouteInfo> {
    COMMON_ROUTES
        .iter()
        .chain(ENTITY_ROUTES)
        .map(|&(method, path)| RouteInfo { method, path })
        .collect()
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ReadyBody>) {
    let backend = match state.backend {
        Backend::Postgres => "postgres",
        Backend::Sqlite => "sqlite",
    };
    if let Err(e) = sqlx::query("SELECT 1").fetch_optional(&state.pool).await {
        tracing::warn!(error = %e, "readiness probe failed");
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ReadyBody {
                status: "degraded",
                database: "unavailable",
                backend,
            }),
        );
    }
    (
        StatusCode::OK,
        Json(ReadyBody {
            status: "ok",
            database: "ok",
            backend,
        }),
    )
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(error_body("Route not found", StatusCode::NOT_FOUND)),
    )
}

pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(sitemap))
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .fallback(not_found)
        .with_state(state)
}
