//! Generic CRUD execution for any [`Entity`].

use crate::error::AppError;
use crate::models::Entity;
use crate::sql::{delete_by_id, insert, select_all, select_by_id, QueryBuf};
use sqlx::AnyConnection;

pub struct CrudService;

impl CrudService {
    /// All rows ordered by `order_by` (primary key when empty).
    pub async fn list<E: Entity>(conn: &mut AnyConnection, order_by: &[&str]) -> Result<Vec<E>, AppError> {
        let q = select_all(&E::META, order_by);
        Self::query_many(conn, &q).await
    }

    pub async fn find<E: Entity>(conn: &mut AnyConnection, id: i64) -> Result<Option<E>, AppError> {
        let q = select_by_id(&E::META, id);
        Self::query_optional(conn, &q).await
    }

    /// Insert a row made only of column defaults. Used for purchases and sales.
    pub async fn create_empty<E: Entity>(conn: &mut AnyConnection) -> Result<E, AppError> {
        let q = insert(&E::META, Vec::new());
        let row = Self::query_optional(conn, &q).await?.ok_or(AppError::NoRowReturned(E::META.table))?;
        tracing::info!(table = E::META.table, "row created");
        Ok(row)
    }

    /// Delete by id; `NotFound` with the entity label when there is no such row.
    pub async fn delete<E: Entity>(conn: &mut AnyConnection, id: i64) -> Result<(), AppError> {
        let q = delete_by_id(&E::META, id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let deleted = q.build().fetch_optional(&mut *conn).await?;
        if deleted.is_none() {
            tracing::warn!(table = E::META.table, id, "delete of missing row");
            return Err(AppError::NotFound(E::META.label));
        }
        tracing::info!(table = E::META.table, id, "row deleted");
        Ok(())
    }

    pub(crate) async fn query_many<E: Entity>(conn: &mut AnyConnection, q: &QueryBuf) -> Result<Vec<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = q.build_as::<E>().fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    pub(crate) async fn query_optional<E: Entity>(
        conn: &mut AnyConnection,
        q: &QueryBuf,
    ) -> Result<Option<E>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = q.build_as::<E>().fetch_optional(&mut *conn).await?;
        Ok(row)
    }
}
