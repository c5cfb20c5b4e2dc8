//! Persistence layer: one struct per table, plus the static metadata the SQL builder reads.

mod product;
mod purchase;
mod sale;
mod transaction;
mod warehouse;

pub use product::{NewProduct, Product};
pub use purchase::Purchase;
pub use sale::Sale;
pub use transaction::{NewTransaction, Transaction};
pub use warehouse::Warehouse;

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::any::AnyRow;
use sqlx::FromRow;

/// Primary key column shared by every table.
pub const PRIMARY_KEY: &str = "id";

/// Table name, selectable columns, and the label used in `"<label> not found"` messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityMeta {
    pub table: &'static str,
    pub columns: &'static [&'static str],
    pub label: &'static str,
}

/// A row type backed by one table.
pub trait Entity: for<'r> FromRow<'r, AnyRow> + Serialize + Send + Unpin {
    const META: EntityMeta;

    /// Plain key-value record covering every column. List responses are built from these.
    fn to_record(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        }
    }
}
