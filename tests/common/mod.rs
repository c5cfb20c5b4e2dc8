//! Test harness: the full service over a fresh SQLite database, in memory or in a temp file.

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use inventory_api::{app, connect, ensure_inventory_tables, AppState, Settings};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub struct TestApp {
    pub state: AppState,
    /// Keeps a file-backed database alive until the app is dropped.
    _db_dir: Option<TempDir>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("response body is not UTF-8")
    }
}

impl TestApp {
    /// Single-connection in-memory database.
    pub async fn new() -> Self {
        Self::build("sqlite::memory:".to_string(), None, None).await
    }

    /// Database file in a temp dir with a real pool, so requests can hold separate connections at once.
    pub async fn with_database_file(max_connections: u32) -> Self {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("inventory.db").display());
        Self::build(url, Some(max_connections), Some(dir)).await
    }

    async fn build(url: String, max_connections: Option<u32>, dir: Option<TempDir>) -> Self {
        let settings = Settings::from_lookup(|key| match key {
            "DB_CONNECTION_STRING" => Some(url.clone()),
            "DB_MAX_CONNECTIONS" => max_connections.map(|n| n.to_string()),
            _ => None,
        })
        .unwrap();
        let pool = connect(&settings).await.unwrap();
        ensure_inventory_tables(&pool, settings.backend).await.unwrap();
        TestApp {
            state: AppState {
                pool,
                backend: settings.backend,
            },
            _db_dir: dir,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        self.send(request).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = app(self.state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec();
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }

    /// Warehouses have no write endpoint; tests provision them directly.
    pub async fn seed_warehouse(&self, name: &str, location: Option<&str>) {
        let query = match location {
            Some(location) => sqlx::query(r#"INSERT INTO "warehouses" ("name", "location") VALUES ($1, $2)"#)
                .bind(name.to_string())
                .bind(location.to_string()),
            None => sqlx::query(r#"INSERT INTO "warehouses" ("name") VALUES ($1)"#).bind(name.to_string()),
        };
        query.execute(&self.state.pool).await.unwrap();
    }

    /// Create a product and return its id.
    pub async fn create_product(&self, item: &str, quantity: i64) -> i64 {
        let res = self
            .post(
                "/products/all",
                serde_json::json!({"item": item, "description": format!("{} description", item), "quantity": quantity}),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
        res.json()
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["item"] == item)
            .and_then(|p| p["id"].as_i64())
            .unwrap()
    }

    pub async fn product_quantity(&self, id: i64) -> i64 {
        let res = self.get("/products/all").await;
        res.json()
            .as_array()
            .unwrap()
            .iter()
            .find(|p| p["id"] == id)
            .and_then(|p| p["quantity"].as_i64())
            .unwrap()
    }
}
