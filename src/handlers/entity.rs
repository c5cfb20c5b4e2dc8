//! Entity handlers shared by every resource: list, create an empty row, delete by id.
//! Each handler is generic over the entity and mounted once per table.

use crate::error::AppError;
use crate::models::Entity;
use crate::response::{ok_text, success_records};
use crate::service::{CrudService, UnitOfWork};
use axum::{extract::Path, response::IntoResponse};

/// `GET /<resource>/all`: every row in primary-key order.
pub async fn list<E: Entity>(mut uow: UnitOfWork) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<E>(uow.conn(), &[]).await?;
    uow.commit().await?;
    Ok(success_records(&rows))
}

/// `POST /<resource>/all` for body-less resources: insert a default row, answer with the full list.
pub async fn create_empty<E: Entity>(mut uow: UnitOfWork) -> Result<impl IntoResponse, AppError> {
    CrudService::create_empty::<E>(uow.conn()).await?;
    let rows = CrudService::list::<E>(uow.conn(), &[]).await?;
    uow.commit().await?;
    Ok(success_records(&rows))
}

/// `DELETE /<resource>/delete/:id`.
pub async fn delete<E: Entity>(mut uow: UnitOfWork, Path(id): Path<i64>) -> Result<impl IntoResponse, AppError> {
    CrudService::delete::<E>(uow.conn(), id).await?;
    uow.commit().await?;
    Ok(ok_text())
}
