use super::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stock movement: links a purchase and/or sale to a product and warehouse with a quantity delta.
/// All references are plain ids; nothing enforces that the referenced rows exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub purchases_id: Option<i64>,
    pub products_id: i64,
    pub sales_id: Option<i64>,
    pub quantity: i64,
    pub warehouses_id: Option<i64>,
}

impl Entity for Transaction {
    const META: EntityMeta = EntityMeta {
        table: "transactions",
        columns: &["id", "purchases_id", "products_id", "sales_id", "quantity", "warehouses_id"],
        label: "Transaction",
    };
}

/// Body of `POST /transactions/new`. `purchases_id` must be present (it may be null);
/// `sales_id` and `warehouses_id` may be omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct NewTransaction {
    pub purchases_id: Option<i64>,
    pub products_id: i64,
    #[serde(default)]
    pub sales_id: Option<i64>,
    pub quantity: i64,
    #[serde(default)]
    pub warehouses_id: Option<i64>,
}

impl NewTransaction {
    pub const REQUIRED: &'static [&'static str] = &["purchases_id", "products_id", "quantity"];
}
