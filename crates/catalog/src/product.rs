use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, ProductId};

/// A catalog record as the order workflow sees it: authoritative price and
/// currently available stock.
///
/// `unit_price` is in the smallest currency unit (e.g. cents). `version`
/// advances once per committed quantity update and is the optimistic
/// concurrency token for `ProductStore::update_quantities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogProduct {
    id: ProductId,
    name: String,
    unit_price: u64,
    quantity: i64,
    version: u64,
}

impl CatalogProduct {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        unit_price: u64,
        quantity: i64,
    ) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        if quantity < 0 {
            return Err(DomainError::validation("stock quantity cannot be negative"));
        }
        Ok(Self {
            id,
            name,
            unit_price,
            quantity,
            version: 0,
        })
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> u64 {
        self.unit_price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    /// Rebuild a record at a known version (store implementations use this
    /// when materializing rows they own).
    pub fn at_version(mut self, version: u64) -> Self {
        self.version = version;
        self
    }
}

/// Absolute quantity target for one product, computed from a catalog
/// snapshot.
///
/// `expected_version` is the snapshot version the target was computed from;
/// the store must reject the whole batch if the live version has moved on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityDelta {
    pub product_id: ProductId,
    pub new_quantity: i64,
    pub expected_version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_product_starts_at_version_zero() {
        let product = CatalogProduct::new(ProductId::new(), "Widget", 1000, 5).unwrap();
        assert_eq!(product.version(), 0);
        assert_eq!(product.unit_price(), 1000);
        assert_eq!(product.quantity(), 5);
    }

    #[test]
    fn negative_stock_is_rejected() {
        let err = CatalogProduct::new(ProductId::new(), "Widget", 1000, -1).unwrap_err();
        match err {
            DomainError::Validation(msg) => assert!(msg.contains("negative")),
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = CatalogProduct::new(ProductId::new(), "  ", 1000, 5).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("expected Validation error"),
        }
    }

    #[test]
    fn at_version_overrides_the_counter() {
        let product = CatalogProduct::new(ProductId::new(), "Widget", 1000, 5)
            .unwrap()
            .at_version(7);
        assert_eq!(product.version(), 7);
    }
}
