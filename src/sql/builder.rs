//! Builds parameterized SELECT, INSERT, UPDATE, DELETE from entity metadata.
//! Placeholders are `$n`, which both PostgreSQL and SQLite accept.

use crate::models::{EntityMeta, PRIMARY_KEY};
use sqlx::any::{AnyArguments, AnyRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{Any, FromRow};

/// Quote identifier (safe: only from metadata).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn column_list(meta: &EntityMeta) -> String {
    meta.columns.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// A value bound to a query. `Null` is written inline as `NULL` instead of being bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindValue {
    Null,
    Int(i64),
    Text(String),
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::Int(n)
    }
}

impl From<Option<i64>> for BindValue {
    fn from(n: Option<i64>) -> Self {
        n.map(BindValue::Int).unwrap_or(BindValue::Null)
    }
}

impl From<&str> for BindValue {
    fn from(s: &str) -> Self {
        BindValue::Text(s.to_string())
    }
}

impl From<String> for BindValue {
    fn from(s: String) -> Self {
        BindValue::Text(s)
    }
}

#[derive(Debug, Default)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf::default()
    }

    /// Returns the placeholder to splice into the SQL text.
    fn push_param(&mut self, v: BindValue) -> String {
        if v == BindValue::Null {
            return "NULL".to_string();
        }
        self.params.push(v);
        format!("${}", self.params.len())
    }

    /// Query for statements whose rows are not decoded.
    pub fn build(&self) -> Query<'_, Any, AnyArguments<'_>> {
        let mut query = sqlx::query(&self.sql);
        for p in &self.params {
            query = match p {
                BindValue::Int(n) => query.bind(*n),
                BindValue::Text(s) => query.bind(s.clone()),
                BindValue::Null => query,
            };
        }
        query
    }

    /// Query decoding each row as `T`.
    pub fn build_as<T>(&self) -> QueryAs<'_, Any, T, AnyArguments<'_>>
    where
        T: for<'r> FromRow<'r, AnyRow>,
    {
        let mut query = sqlx::query_as::<Any, T>(&self.sql);
        for p in &self.params {
            query = match p {
                BindValue::Int(n) => query.bind(*n),
                BindValue::Text(s) => query.bind(s.clone()),
                BindValue::Null => query,
            };
        }
        query
    }
}

/// SELECT every row, ordered by the given columns (primary key when empty).
pub fn select_all(meta: &EntityMeta, order_by: &[&str]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let order = if order_by.is_empty() {
        quoted(PRIMARY_KEY)
    } else {
        order_by.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
    };
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        column_list(meta),
        quoted(meta.table),
        order
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(meta: &EntityMeta, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = {}",
        column_list(meta),
        quoted(meta.table),
        quoted(PRIMARY_KEY),
        ph
    );
    q
}

/// INSERT one row and return it. With no values the row takes every column default.
pub fn insert(meta: &EntityMeta, values: Vec<(&str, BindValue)>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let table = quoted(meta.table);
    let returning = column_list(meta);
    if values.is_empty() {
        q.sql = format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning);
        return q;
    }
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (col, val) in values {
        cols.push(quoted(col));
        placeholders.push(q.push_param(val));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table,
        cols.join(", "),
        placeholders.join(", "),
        returning
    );
    q
}

/// UPDATE `column = column + delta` by primary key in one statement, returning the updated row.
/// The database applies the addition under its row lock, so concurrent increments are never lost.
pub fn increment(meta: &EntityMeta, column: &str, id: i64, delta: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let delta_ph = q.push_param(delta.into());
    let id_ph = q.push_param(id.into());
    let col = quoted(column);
    q.sql = format!(
        "UPDATE {} SET {} = {} + {} WHERE {} = {} RETURNING {}",
        quoted(meta.table),
        col,
        col,
        delta_ph,
        quoted(PRIMARY_KEY),
        id_ph,
        column_list(meta)
    );
    q
}

/// SELECT the sum of `column` over rows where `filter_column = value`; 0 when nothing matches.
pub fn sum_where(meta: &EntityMeta, column: &str, filter_column: &str, value: BindValue) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(value);
    q.sql = format!(
        "SELECT CAST(COALESCE(SUM({}), 0) AS BIGINT) FROM {} WHERE {} = {}",
        quoted(column),
        quoted(meta.table),
        quoted(filter_column),
        ph
    );
    q
}

/// DELETE by primary key, returning the deleted id.
pub fn delete_by_id(meta: &EntityMeta, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let ph = q.push_param(id.into());
    q.sql = format!(
        "DELETE FROM {} WHERE {} = {} RETURNING {}",
        quoted(meta.table),
        quoted(PRIMARY_KEY),
        ph,
        quoted(PRIMARY_KEY)
    );
    q
}
