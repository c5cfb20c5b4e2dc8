use super::{Entity, EntityMeta};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A purchase event. Carries no fields beyond its id; transactions point at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Purchase {
    pub id: i64,
}

impl Entity for Purchase {
    const META: EntityMeta = EntityMeta {
        table: "purchases",
        columns: &["id"],
        label: "Purchase",
    };
}
