use super::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only through the API; rows are provisioned directly in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Warehouse {
    pub id: i64,
    pub name: String,
    pub location: Option<String>,
}

impl Entity for Warehouse {
    const META: EntityMeta = EntityMeta {
        table: "warehouses",
        columns: &["id", "name", "location"],
        label: "Warehouse",
    };
}
