//! Cart line items.

use serde::{Deserialize, Serialize};

use super::id::{LineId, ProductId};

/// A (product reference, quantity) pair inside the cart.
///
/// Line items are owned by the cart store; everything else sees snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineId,
    pub product_id: ProductId,
    pub quantity: u32,
}

impl LineItem {
    /// Create a new line item.
    #[must_use]
    pub const fn new(id: LineId, product_id: ProductId, quantity: u32) -> Self {
        Self {
            id,
            product_id,
            quantity,
        }
    }
}

/// Sum of quantities over a set of line items.
#[must_use]
pub fn total_quantity(lines: &[LineItem]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}
