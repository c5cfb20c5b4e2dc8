//! Services: generic CRUD over entity metadata, inventory operations, request validation.

mod crud;
mod inventory;
mod unit_of_work;
mod validation;
pub use crud::CrudService;
pub use inventory::InventoryService;
pub use unit_of_work::UnitOfWork;
pub use validation::{verify_required, RequestValidator};
