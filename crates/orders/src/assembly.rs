//! Pure line-assembly logic: the decision half of order placement.
//!
//! Everything here is deterministic and IO-free. Given the caller's request
//! lines and a catalog snapshot, either every line is matched, stock-checked,
//! and priced, or the first violated invariant aborts the whole assembly
//! with no partial output.

use storefront_catalog::{CatalogProduct, QuantityDelta};
use storefront_core::ProductId;

use crate::order::{OrderLineItem, OrderLineRequest};
use crate::place::PlaceOrderError;

/// Output of a successful assembly pass.
///
/// `deltas` carries one entry per request line, in request order, each
/// computed against the same undecremented snapshot. When a product appears
/// in several lines its deltas coincide and the store's last-applied-wins
/// batch semantics make the net effect a single decrement. `rollbacks`
/// carries one entry per distinct product, targeting the snapshot quantity
/// at the post-update version, for compensation if the order write fails
/// after the stock decrement succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineAssembly {
    pub items: Vec<OrderLineItem>,
    pub deltas: Vec<QuantityDelta>,
    pub rollbacks: Vec<QuantityDelta>,
}

/// The distinct product ids of a request, first-seen order preserved.
///
/// Used for the batch catalog lookup; the original line sequence (possibly
/// containing duplicates) is still what gets assembled.
pub fn distinct_product_ids(lines: &[OrderLineRequest]) -> Vec<ProductId> {
    let mut ids = Vec::with_capacity(lines.len());
    for line in lines {
        if !ids.contains(&line.product_id()) {
            ids.push(line.product_id());
        }
    }
    ids
}

/// Match every request line against the catalog snapshot, check stock
/// sufficiency, and compute the order lines plus the quantity targets to
/// submit.
///
/// Fail-fast in request order: the first line whose product is missing from
/// the snapshot fails with `ProductNotFound`, the first line requesting more
/// than the snapshot quantity fails with `InsufficientStock`, and in either
/// case nothing is returned for the lines that already passed.
pub fn assemble_lines(
    lines: &[OrderLineRequest],
    snapshot: &[CatalogProduct],
) -> Result<LineAssembly, PlaceOrderError> {
    let mut items = Vec::with_capacity(lines.len());
    let mut deltas = Vec::with_capacity(lines.len());
    let mut rollbacks: Vec<QuantityDelta> = Vec::new();

    for line in lines {
        let product = snapshot
            .iter()
            .find(|p| p.id() == line.product_id())
            .ok_or(PlaceOrderError::ProductNotFound(line.product_id()))?;

        if line.quantity() > product.quantity() {
            return Err(PlaceOrderError::InsufficientStock {
                product_id: product.id(),
                requested: line.quantity(),
                available: product.quantity(),
            });
        }

        // Each line is evaluated against the snapshot as read; the snapshot
        // is not decremented between lines.
        deltas.push(QuantityDelta {
            product_id: product.id(),
            new_quantity: product.quantity() - line.quantity(),
            expected_version: product.version(),
        });

        items.push(OrderLineItem {
            product_id: product.id(),
            unit_price: product.unit_price(),
            quantity: line.quantity(),
        });

        if !rollbacks.iter().any(|r| r.product_id == product.id()) {
            rollbacks.push(QuantityDelta {
                product_id: product.id(),
                new_quantity: product.quantity(),
                expected_version: product.version() + 1,
            });
        }
    }

    Ok(LineAssembly {
        items,
        deltas,
        rollbacks,
    })
}
