//! Inventory API: REST backend over products, purchases, sales, transactions and warehouses.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, ErrorBody};
pub use routes::{app, common_routes, entity_routes, router};
pub use service::{CrudService, InventoryService, UnitOfWork};
pub use state::AppState;
pub use store::{connect, ensure_inventory_tables, Backend};
