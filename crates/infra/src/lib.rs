//! `storefront-infra` — store implementations and process plumbing.
//!
//! The domain crates only know the store contracts; this crate supplies the
//! in-memory implementations used by tests and development wiring, plus
//! tracing initialization for processes that host the workflow.

pub mod in_memory;
pub mod telemetry;


pub use in_memory::{InMemoryCustomerStore, InMemoryOrderStore, InMemoryProductStore};
