use super::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A sale event, same shape as [`Purchase`](super::Purchase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Sale {
    pub id: i64,
}

impl Entity for Sale {
    const META: EntityMeta = EntityMeta {
        table: "sales",
        columns: &["id"],
        label: "Sale",
    };
}
