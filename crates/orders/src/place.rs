//! Order-placement orchestration (application-level pipeline).
//!
//! `OrderPlacement` composes the three store contracts and runs the
//! placement pipeline:
//!
//! ```text
//! CreateOrder
//!   ↓
//! 1. Resolve customer (lookup)
//!   ↓
//! 2. Snapshot catalog for the requested products (batch lookup)
//!   ↓
//! 3. Assemble lines (pure: match, stock check, price snapshot, deltas)
//!   ↓
//! 4. Apply quantity targets (atomic batch, optimistic version check)
//!   ↓
//! 5. Persist the order (store assigns identity)
//! ```
//!
//! Fail-fast: the first violated invariant aborts the operation, and no
//! mutation happens before step 4. A failure in step 5 triggers a
//! compensating stock restore so inventory is never left decremented
//! without a persisted order.

use chrono::{DateTime, Utc};
use thiserror::Error;

use storefront_catalog::ProductStore;
use storefront_core::{CustomerId, ProductId, StoreError};
use storefront_customers::CustomerStore;

use crate::assembly::{assemble_lines, distinct_product_ids};
use crate::order::{NewOrder, Order, OrderLineRequest};
use crate::store::OrderStore;

/// The one operation this workflow exposes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateOrder {
    pub customer_id: CustomerId,
    pub lines: Vec<OrderLineRequest>,
    pub occurred_at: DateTime<Utc>,
}

/// Why an order could not be placed.
///
/// The first three are precondition violations detected before any
/// mutation; retrying them without changing the input reproduces the same
/// error for unchanged store state. The last three are infrastructure
/// failures surfaced from the collaborators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    #[error("customer not found: {0}")]
    CustomerNotFound(CustomerId),

    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    #[error("insufficient stock for {product_id}: requested {requested}, available {available}")]
    InsufficientStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// A read-side collaborator failed before any mutation.
    #[error("lookup failed: {0}")]
    Lookup(#[source] StoreError),

    /// The stock decrement failed; validation had already passed, nothing
    /// was mutated.
    #[error("inventory update failed: {0}")]
    InventoryUpdate(#[source] StoreError),

    /// The order write failed after the stock decrement; the decrement is
    /// compensated before this is returned.
    #[error("order persistence failed: {0}")]
    OrderPersistence(#[source] StoreError),
}

/// Order-placement workflow over injected store contracts.
///
/// Generic over the collaborators so tests can run entirely against
/// in-memory implementations and production can swap in real backends
/// without touching this pipeline.
#[derive(Debug)]
pub struct OrderPlacement<C, P, O> {
    customers: C,
    products: P,
    orders: O,
}

impl<C, P, O> OrderPlacement<C, P, O> {
    pub fn new(customers: C, products: P, orders: O) -> Self {
        Self {
            customers,
            products,
            orders,
        }
    }
}

impl<C, P, O> OrderPlacement<C, P, O>
where
    C: CustomerStore,
    P: ProductStore,
    O: OrderStore,
{
    /// Place an order, returning the persisted aggregate.
    ///
    /// Performs no mutation until every line has been validated against the
    /// catalog snapshot. The quantity update is an optimistic batch: if a
    /// concurrent writer moved any product's version between the snapshot
    /// read and the update, the whole batch fails with
    /// `PlaceOrderError::InventoryUpdate` and stock is untouched.
    pub async fn place(&self, command: CreateOrder) -> Result<Order, PlaceOrderError> {
        // 1) Resolve the customer.
        let customer = self
            .customers
            .find_by_id(command.customer_id)
            .await
            .map_err(PlaceOrderError::Lookup)?
            .ok_or(PlaceOrderError::CustomerNotFound(command.customer_id))?;

        // 2) Snapshot the catalog (duplicates collapsed for the lookup).
        let ids = distinct_product_ids(&command.lines);
        let snapshot = self
            .products
            .find_all_by_id(&ids)
            .await
            .map_err(PlaceOrderError::Lookup)?;

        // 3) Validate every line and compute items + quantity targets.
        let assembly = assemble_lines(&command.lines, &snapshot)?;

        // 4) Decrement stock. First mutation of the pipeline.
        self.products
            .update_quantities(&assembly.deltas)
            .await
            .map_err(PlaceOrderError::InventoryUpdate)?;

        // 5) Persist the order; compensate the decrement if that fails.
        let new_order = NewOrder {
            customer,
            lines: assembly.items,
            placed_at: command.occurred_at,
        };

        match self.orders.create(new_order).await {
            Ok(order) => Ok(order),
            Err(err) => {
                if let Err(rollback_err) =
                    self.products.update_quantities(&assembly.rollbacks).await
                {
                    // Inventory is now decremented with no matching order;
                    // this needs operator attention.
                    tracing::error!(
                        error = %rollback_err,
                        "stock restore failed after order persistence failure"
                    );
                }
                Err(PlaceOrderError::OrderPersistence(err))
            }
        }
    }
}
