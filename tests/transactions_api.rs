mod common;

use axum::http::StatusCode;
use common::TestApp;
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Barrier;

#[tokio::test]
async fn recording_a_transaction_bumps_product_quantity() {
    let app = TestApp::new().await;
    app.seed_warehouse("Main", Some("Dock 1")).await;
    let id = app.create_product("Widget", 5).await;

    let res = app
        .post(
            "/transactions/new",
            json!({"purchases_id": 1, "products_id": id, "sales_id": null, "quantity": 3, "warehouses_id": 1}),
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    let transactions = res.json();
    assert_eq!(transactions.as_array().unwrap().len(), 1);
    assert_eq!(transactions[0]["products_id"], id);
    assert_eq!(transactions[0]["quantity"], 3);
    assert_eq!(transactions[0]["sales_id"], serde_json::Value::Null);
    assert_eq!(transactions[0]["warehouses_id"], 1);

    assert_eq!(app.product_quantity(id).await, 8);
}

#[tokio::test]
async fn negative_quantities_are_applied_without_bounds() {
    let app = TestApp::new().await;
    let id = app.create_product("Widget", 2).await;
    let res = app
        .post("/transactions/new", json!({"purchases_id": null, "products_id": id, "sales_id": 1, "quantity": -5}))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(app.product_quantity(id).await, -3);
}

#[tokio::test]
async fn new_transaction_is_last_and_order_is_stable() {
    let app = TestApp::new().await;
    let id = app.create_product("Widget", 0).await;
    for qty in [1, 2, 3] {
        let res = app
            .post("/transactions/new", json!({"purchases_id": 1, "products_id": id, "quantity": qty}))
            .await;
        assert_eq!(res.status, StatusCode::OK);
        let list = res.json();
        let last = list.as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["quantity"], qty);
    }

    let first = app.get("/transactions/new").await.json();
    let second = app.get("/transactions/new").await.json();
    assert_eq!(first, second);
    let ids: Vec<i64> = first.as_array().unwrap().iter().map(|t| t["id"].as_i64().unwrap()).collect();
    let mut sorted = ids.clone();
    sorted.sort();
    assert_eq!(ids, sorted);
    assert_eq!(app.product_quantity(id).await, 6);
}

#[tokio::test]
async fn missing_required_fields() {
    let app = TestApp::new().await;
    let id = app.create_product("Widget", 5).await;

    for (body, field) in [
        (json!({"products_id": id, "quantity": 1}), "purchases_id"),
        (json!({"purchases_id": 1, "quantity": 1}), "products_id"),
        (json!({"purchases_id": 1, "products_id": id}), "quantity"),
    ] {
        let res = app.post("/transactions/new", body).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST);
        assert_eq!(res.json()["message"], format!("You need to specify the {}", field));
    }
    assert_eq!(app.get("/transactions/new").await.json(), json!([]));
    assert_eq!(app.product_quantity(id).await, 5);
}

#[tokio::test]
async fn unknown_product_rolls_back() {
    let app = TestApp::new().await;
    let res = app
        .post("/transactions/new", json!({"purchases_id": 1, "products_id": 999, "quantity": 4}))
        .await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json(), json!({"message": "Product not found", "status_code": 404}));
    assert_eq!(app.get("/transactions/new").await.json(), json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_transactions_do_not_lose_updates() {
    let app = Arc::new(TestApp::with_database_file(4).await);
    let id = app.create_product("Widget", 10).await;

    let deltas: Vec<i64> = (1..=8).collect();
    let start = Arc::new(Barrier::new(deltas.len()));
    let handles: Vec<_> = deltas
        .iter()
        .map(|&delta| {
            let app = Arc::clone(&app);
            let start = Arc::clone(&start);
            tokio::spawn(async move {
                start.wait().await;
                app.post("/transactions/new", json!({"purchases_id": 1, "products_id": id, "quantity": delta}))
                    .await
            })
        })
        .collect();

    for handle in handles {
        let res = handle.await.unwrap();
        assert_eq!(res.status, StatusCode::OK, "{}", res.text());
    }
    assert_eq!(app.product_quantity(id).await, 10 + deltas.iter().sum::<i64>());
    let res = app.get(&format!("/transactions/product/{}", id)).await;
    assert_eq!(res.json()["total"], deltas.iter().sum::<i64>());
    assert_eq!(app.get("/transactions/new").await.json().as_array().unwrap().len(), deltas.len());
}

#[tokio::test]
async fn product_total_sums_transactions() {
    let app = TestApp::new().await;
    let widget = app.create_product("Widget", 100).await;
    let gadget = app.create_product("Gadget", 0).await;
    for (product, qty) in [(widget, 3), (widget, -1), (gadget, 9)] {
        app.post("/transactions/new", json!({"purchases_id": 1, "products_id": product, "quantity": qty}))
            .await;
    }

    let res = app.get(&format!("/transactions/product/{}", widget)).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json(), json!({"products_id": widget, "total": 2}));

    let res = app.post(&format!("/transactions/product/{}", gadget), json!({})).await;
    assert_eq!(res.json()["total"], 9);
}

#[tokio::test]
async fn product_total_without_transactions_is_zero() {
    let app = TestApp::new().await;
    let id = app.create_product("Widget", 4).await;
    let res = app.get(&format!("/transactions/product/{}", id)).await;
    assert_eq!(res.json()["total"], 0);

    let res = app.get("/transactions/product/12345").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.json()["message"], "Product not found");
}
