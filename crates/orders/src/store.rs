//! Order persistence contract.

use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::StoreError;

use crate::order::{NewOrder, Order};

/// Order persistence.
///
/// `create` stores the assembled payload as a new aggregate, assigns its
/// identifier, and returns the stored form.
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError>;
}

#[async_trait]
impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    async fn create(&self, order: NewOrder) -> Result<Order, StoreError> {
        (**self).create(order).await
    }
}
