//! Opens the request's [`UnitOfWork`] from the shared pool.

use crate::error::AppError;
use crate::service::UnitOfWork;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};

#[async_trait]
impl FromRequestParts<AppState> for UnitOfWork {
    type Rejection = AppError;

    async fn from_request_parts(_parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        UnitOfWork::begin(&state.pool).await
    }
}
