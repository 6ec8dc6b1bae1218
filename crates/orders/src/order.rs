use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, OrderId, ProductId};
use storefront_customers::Customer;

/// One requested line of an order, as submitted by the caller.
///
/// The constructor is the only way to build one, so the workflow never sees
/// a non-positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineRequest {
    product_id: ProductId,
    quantity: i64,
}

impl OrderLineRequest {
    pub fn new(product_id: ProductId, quantity: i64) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::validation(
                "requested quantity must be positive",
            ));
        }
        Ok(Self {
            product_id,
            quantity,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// One line of a persisted order: product, quantity, and the unit price
/// captured from the catalog at placement time.
///
/// The price is a snapshot. Later catalog price changes must not reach back
/// into an already-placed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    /// Unit price in the smallest currency unit (e.g. cents).
    pub unit_price: u64,
    pub quantity: i64,
}

/// Fully assembled order payload, ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    pub customer: Customer,
    pub lines: Vec<OrderLineItem>,
    pub placed_at: DateTime<Utc>,
}

/// Aggregate root: a persisted order.
///
/// Created exactly once per successful placement and never mutated by this
/// workflow afterwards. The identifier is assigned by the order store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: Customer,
    lines: Vec<OrderLineItem>,
    placed_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: OrderId,
        customer: Customer,
        lines: Vec<OrderLineItem>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            customer,
            lines,
            placed_at,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn lines(&self) -> &[OrderLineItem] {
        &self.lines
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }
}
