//! Transaction handlers. Recording a transaction also moves the product's stock.

use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{NewTransaction, Transaction};
use crate::response::{success_one, success_records};
use crate::service::{CrudService, InventoryService, RequestValidator, UnitOfWork};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

/// `POST /transactions/new`: insert + product increment commit together; answer with all transactions by id.
pub async fn create_transaction(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let new: NewTransaction = RequestValidator::decode(body, NewTransaction::REQUIRED)?;
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    InventoryService::record_transaction(uow.conn(), &new).await?;
    let rows = CrudService::list::<Transaction>(uow.conn(), &["id"]).await?;
    uow.commit().await?;
    Ok(success_records(&rows))
}

#[derive(Serialize)]
pub struct ProductTotal {
    pub products_id: i64,
    pub total: i64,
}

/// `GET|POST /transactions/product/:id`: net quantity moved by transactions for a product.
pub async fn product_total(mut uow: UnitOfWork, Path(products_id): Path<i64>) -> Result<impl IntoResponse, AppError> {
    let total = InventoryService::product_total(uow.conn(), products_id).await?;
    uow.commit().await?;
    Ok(success_one(ProductTotal { products_id, total }))
}
