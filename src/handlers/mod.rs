//! HTTP handlers: generic entity list/create/delete, products, transactions.

pub mod entity;
pub mod products;
pub mod transactions;
pub use entity::*;
pub use products::*;
pub use transactions::*;
