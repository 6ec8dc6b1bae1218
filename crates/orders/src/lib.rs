//! Orders domain module: the order-placement workflow.
//!
//! Placing an order is a single invariant-preserving operation over shared
//! inventory state: validate the customer and every requested product,
//! check stock sufficiency, snapshot prices, decrement inventory, persist
//! the aggregate. The decision logic is pure (`assembly`); the IO
//! choreography around it lives in `place`.

pub mod assembly;
pub mod order;
pub mod place;
pub mod store;

pub use assembly::{LineAssembly, assemble_lines, distinct_product_ids};
pub use order::{NewOrder, Order, OrderLineItem, OrderLineRequest};
pub use place::{CreateOrder, OrderPlacement, PlaceOrderError};
pub use store::OrderStore;
