//! Customer lookup contract.

use std::sync::Arc;

use async_trait::async_trait;

use storefront_core::{CustomerId, StoreError};

use crate::customer::Customer;

/// Read-only customer lookup.
///
/// Absence is not an error at this level: a missing record is `Ok(None)`,
/// and it is the caller's decision what a miss means. `Err` is reserved for
/// infrastructure failure.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError>;
}

#[async_trait]
impl<S> CustomerStore for Arc<S>
where
    S: CustomerStore + ?Sized,
{
    async fn find_by_id(&self, id: CustomerId) -> Result<Option<Customer>, StoreError> {
        (**self).find_by_id(id).await
    }
}
