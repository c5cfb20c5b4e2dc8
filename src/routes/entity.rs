//! Inventory routes. The same generic handlers serve every table; only products and
//! transactions have bespoke create handlers.

use crate::handlers::{create_empty, create_product, create_transaction, delete, list, product_total};
use crate::models::{Product, Purchase, Sale, Transaction, Warehouse};
use crate::state::AppState;
use axum::{
    routing::{delete as delete_route, get},
    Router,
};

/// Method and path of every public inventory route, as listed by the sitemap.
pub const ENTITY_ROUTES: &[(&str, &str)] = &[
    ("GET", "/products/all"),
    ("POST", "/products/all"),
    ("DELETE", "/products/delete/:id"),
    ("GET", "/purchases/all"),
    ("POST", "/purchases/all"),
    ("DELETE", "/purchases/delete/:id"),
    ("GET", "/sales/all"),
    ("POST", "/sales/all"),
    ("DELETE", "/sales/delete/:id"),
    ("GET", "/transactions/new"),
    ("POST", "/transactions/new"),
    ("GET", "/transactions/product/:id"),
    ("POST", "/transactions/product/:id"),
    ("GET", "/warehouses/all"),
];

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/products/all", get(list::<Product>).post(create_product))
        .route("/products/delete/:id", delete_route(delete::<Product>))
        .route("/purchases/all", get(list::<Purchase>).post(create_empty::<Purchase>))
        .route("/purchases/delete/:id", delete_route(delete::<Purchase>))
        .route("/sales/all", get(list::<Sale>).post(create_empty::<Sale>))
        .route("/sales/delete/:id", delete_route(delete::<Sale>))
        .route("/transactions/new", get(list::<Transaction>).post(create_transaction))
        .route("/transactions/product/:id", get(product_total).post(product_total))
        .route("/warehouses/all", get(list::<Warehouse>))
        .with_state(state)
}
