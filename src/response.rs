//! Response helpers. List endpoints answer with a bare JSON array; deletes answer `ok`.

use crate::models::Entity;
use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

/// Rows rendered as key-value records, in the order given.
pub fn success_records<E: Entity>(rows: &[E]) -> (StatusCode, Json<Vec<Map<String, Value>>>) {
    (StatusCode::OK, Json(rows.iter().map(Entity::to_record).collect()))
}

pub fn success_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// Plain-text acknowledgement used by delete endpoints.
pub fn ok_text() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}

pub fn error_body(message: impl Into<String>, status: StatusCode) -> serde_json::Value {
    serde_json::json!({
        "message": message.into(),
        "status_code": status.as_u16(),
    })
}
