//! Per-request database transaction.

use crate::error::AppError;
use sqlx::{Any, AnyConnection, AnyPool};

/// One database transaction scoped to a request. `commit` consumes it, so it runs at most once;
/// dropping it without committing rolls everything back.
pub struct UnitOfWork {
    tx: sqlx::Transaction<'static, Any>,
}

impl UnitOfWork {
    pub async fn begin(pool: &AnyPool) -> Result<Self, AppError> {
        let tx = pool.begin().await?;
        Ok(UnitOfWork { tx })
    }

    pub fn conn(&mut self) -> &mut AnyConnection {
        &mut *self.tx
    }

    pub async fn commit(self) -> Result<(), AppError> {
        self.tx.commit().await?;
        Ok(())
    }
}
