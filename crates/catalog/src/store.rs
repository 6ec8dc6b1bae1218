//! Product catalog contracts: batch snapshot read and batch quantity write.

use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{ProductId, StoreError};

use crate::product::{CatalogProduct, QuantityDelta};

/// Product catalog access.
///
/// `find_all_by_id` is a read-only batch lookup: ids with no matching record
/// are simply absent from the result, and it is the caller's job to notice.
///
/// `update_quantities` is the only mutation the workflow performs.
/// Implementations must make it all-or-nothing:
///
/// - every delta's product must exist,
/// - every delta's `expected_version` must match the live version,
/// - no target quantity may be negative,
///
/// and only if every delta passes are any applied. Deltas are applied in
/// submission order; a batch may legally carry several deltas for the same
/// product, in which case the last one wins. The live version advances once
/// per distinct product touched by the batch.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<CatalogProduct>, StoreError>;

    async fn update_quantities(&self, deltas: &[QuantityDelta]) -> Result<(), StoreError>;
}

#[async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn find_all_by_id(&self, ids: &[ProductId]) -> Result<Vec<CatalogProduct>, StoreError> {
        (**self).find_all_by_id(ids).await
    }

    async fn update_quantities(&self, deltas: &[QuantityDelta]) -> Result<(), StoreError> {
        (**self).update_quantities(deltas).await
    }
}
