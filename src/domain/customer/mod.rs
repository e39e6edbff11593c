//! Customer aggregate
//!
//! Customer record, its option-service and package lines, and the
//! transactional write interface used by order registration.

pub mod model;
pub mod repository;

pub use model::{Customer, CustomerId, CustomerOptionService, CustomerPackage, NewCustomer};
pub use repository::{OrderRepository, OrderTransaction};
