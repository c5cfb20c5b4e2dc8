use super::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub item: String,
    pub description: String,
    /// Changed only by recording transactions. May go negative.
    pub quantity: i64,
}

impl Entity for Product {
    const META: EntityMeta = EntityMeta {
        table: "products",
        columns: &["id", "item", "description", "quantity"],
        label: "Product",
    };
}

/// Body of `POST /products/all`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewProduct {
    pub item: String,
    pub description: String,
    #[serde(default)]
    pub quantity: i64,
}

impl NewProduct {
    pub const REQUIRED: &'static [&'static str] = &["item", "description"];
}
