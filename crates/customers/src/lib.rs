//! Customers domain module.
//!
//! The order workflow only needs to know that a customer exists; the entity
//! here carries identity plus a display name and nothing else.

pub mod customer;
pub mod store;

pub use customer::Customer;
pub use store::CustomerStore;
