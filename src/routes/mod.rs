//! Router assembly.

mod common;
mod entity;

pub use common::{common_routes, sitemap_entries, RouteInfo};
pub use entity::{entity_routes, ENTITY_ROUTES};

use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

/// Request bodies above this size are rejected with 413.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Inventory and common routes with CORS, tracing and the body limit applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(entity_routes(state.clone()))
        .merge(common_routes(state))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// The full service: [`router`] behind trailing-slash normalization, so `/products/all/`
/// reaches the same handler as `/products/all`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
