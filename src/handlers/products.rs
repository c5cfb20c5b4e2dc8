use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::models::{NewProduct, Product};
use crate::response::success_records;
use crate::service::{CrudService, InventoryService, RequestValidator, UnitOfWork};
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse};

/// `POST /products/all`: create a product; answer with every product ordered by item.
/// The body is read and validated before a connection is taken from the pool.
pub async fn create_product(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<impl IntoResponse, AppError> {
    let new: NewProduct = RequestValidator::decode(body, NewProduct::REQUIRED)?;
    let mut uow = UnitOfWork::begin(&state.pool).await?;
    InventoryService::create_product(uow.conn(), &new).await?;
    let rows = CrudService::list::<Product>(uow.conn(), &["item", "id"]).await?;
    uow.commit().await?;
    Ok(success_records(&rows))
}
