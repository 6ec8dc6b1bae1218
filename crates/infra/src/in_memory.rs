//! In-memory store implementations.
//!
//! Intended for tests/dev. Not optimized for performance. The product store
//! keeps the same guarantees expected of a real backend: the quantity batch
//! is all-or-nothing and version-checked under a single write lock.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use storefront_catalog::{CatalogProduct, ProductStore, QuantityDelta};
use storefront_core::{CustomerId, OrderId, ProductId, StoreError};
use storefront_customers::{Customer, CustomerStore};
use storefront_orders::{NewOrder, Order, OrderStore};

fn poisoned() -> StoreError {
    StoreError::unavailable("lock poisoned")
}

/// In-memory customer lookup.
#[derive(Debug, Default)]
pub struct InMemoryCustomerStore {
    customers: RwLock<HashMap<CustomerId, Customer>>,
}

impl InMemoryCustomerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, customer: Customer) -> Result<(), StoreError> {
        let mut customers = self.customers.write().map_err(|_| poisoned())?;
        customers.insert(customer.id(), customer);
        Ok(())
    }
}

#[async_trait]
impl CustomerStore for InMemoryCustomerStore {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        let customers = self.customers.read().map_err(|_| poisoned())?;
        Ok(customers.get(&id).cloned())
    }
}

/// Row owned by the in-memory product store.
///
/// Kept separate from `CatalogProduct` so the store, not the caller, owns
/// the live quantity and version.
#[derive(Debug, Clone)]
struct ProductRow {
    name: String,
    unit_price: u64,
    quantity: i64,
    version: u64,
}

/// In-memory product catalog with optimistic quantity updates.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    rows: RwLock<HashMap<ProductId, ProductRow>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, product: CatalogProduct) -> Result<(), StoreError> {
        let mut rows = self.rows.write().map_err(|_| poisoned())?;
        rows.insert(
            product.id(),
            ProductRow {
                name: product.name().to_string(),
                unit_price: product.unit_price(),
                quantity: product.quantity(),
                version: product.version(),
            },
        );
        Ok(())
    }

    /// Fetch a single record (test/assertion convenience).
    pub fn get(&self, id: ProductId) -> Result<Option<CatalogProduct>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        rows.get(&id).map(|row| materialize(id, row)).transpose()
    }
}

fn materialize(id: ProductId, row: &ProductRow) -> Result<CatalogProduct, StoreError> {
    let product = CatalogProduct::new(id, row.name.clone(), row.unit_price, row.quantity)
        .map_err(|e| StoreError::unavailable(format!("corrupt product row: {e}")))?;
    Ok(product.at_version(row.version))
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<CatalogProduct>, StoreError> {
        let rows = self.rows.read().map_err(|_| poisoned())?;
        let mut found = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(row) = rows.get(id) {
                found.push(materialize(*id, row)?);
            }
        }
        Ok(found)
    }

    async fn update_quantities(&self, deltas: &[QuantityDelta]) -> Result<(), StoreError> {
        if deltas.is_empty() {
            return Ok(());
        }

        let mut rows = self.rows.write().map_err(|_| poisoned())?;

        // Validate every delta before applying any.
        for (idx, delta) in deltas.iter().enumerate() {
            let row = rows.get(&delta.product_id).ok_or_else(|| {
                StoreError::conflict(format!(
                    "unknown product at index {idx}: {}",
                    delta.product_id
                ))
            })?;
            if delta.expected_version != row.version {
                return Err(StoreError::conflict(format!(
                    "version check failed for {}: expected {}, found {}",
                    delta.product_id, delta.expected_version, row.version
                )));
            }
            if delta.new_quantity < 0 {
                return Err(StoreError::conflict(format!(
                    "negative stock target for {}",
                    delta.product_id
                )));
            }
        }

        // Apply in submission order; the last delta for a product wins.
        let mut touched: Vec<ProductId> = Vec::new();
        for delta in deltas {
            if let Some(row) = rows.get_mut(&delta.product_id) {
                row.quantity = delta.new_quantity;
            }
            if !touched.contains(&delta.product_id) {
                touched.push(delta.product_id);
            }
        }

        // Version advances once per distinct product in the batch.
        for id in touched {
            if let Some(row) = rows.get_mut(&id) {
                row.version += 1;
            }
        }

        Ok(())
    }
}

/// In-memory order persistence.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, id: OrderId) -> Result<Option<Order>, StoreError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.get(&id).cloned())
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let orders = self.orders.read().map_err(|_| poisoned())?;
        Ok(orders.len())
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().map_err(|_| poisoned())?;
        let stored = Order::new(OrderId::new(), order.customer, order.lines, order.placed_at);
        orders.insert(stored.id(), stored.clone());
        Ok(stored)
    }
}
