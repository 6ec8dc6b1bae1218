use serde::{Deserialize, Serialize};

use storefront_core::{CustomerId, DomainError, DomainResult};

/// A customer able to place orders.
///
/// Deliberately minimal: the placement workflow consumes existence and
/// identity, nothing more.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
}

impl Customer {
    pub fn new(id: CustomerId, name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("customer name cannot be empty"));
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
