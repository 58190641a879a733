//! Process-wide cart state container.
//!
//! One store is created at application start, owned by `AppState`, and torn
//! down with the process. Components read the total through
//! [`CartStore::total_items`] and signal intent through the mutating
//! operations; nothing else touches the line items.

use std::sync::{Arc, PoisonError, RwLock};

use luxlamp_core::{LineId, LineItem, ProductId, total_quantity};
use uuid::Uuid;

/// Shared cart store, cheaply cloneable.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<CartInner>>,
}

#[derive(Debug, Default)]
struct CartInner {
    lines: Vec<LineItem>,
    open: bool,
}

impl CartStore {
    /// Create an empty, closed cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total item count across all line items. No side effects.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        total_quantity(&inner.lines)
    }

    /// Snapshot of the current line items.
    #[must_use]
    pub fn lines(&self) -> Vec<LineItem> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.lines.clone()
    }

    /// Add `quantity` of a product. Merges into an existing line for the
    /// same product, otherwise appends a new line with a fresh id.
    ///
    /// Returns the id of the affected line.
    pub fn add(&self, product_id: ProductId, quantity: u32) -> LineId {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if let Some(line) = inner
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return line.id.clone();
        }
        let id = LineId::new(Uuid::new_v4().to_string());
        inner
            .lines
            .push(LineItem::new(id.clone(), product_id, quantity));
        id
    }

    /// Set a line's quantity. Quantity 0 removes the line. Unknown line ids
    /// are ignored.
    pub fn update(&self, line_id: &LineId, quantity: u32) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if quantity == 0 {
            inner.lines.retain(|line| &line.id != line_id);
            return;
        }
        if let Some(line) = inner.lines.iter_mut().find(|line| &line.id == line_id) {
            line.quantity = quantity;
        }
    }

    /// Remove a line. Unknown line ids are ignored.
    pub fn remove(&self, line_id: &LineId) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.lines.retain(|line| &line.id != line_id);
    }

    /// Signal the cart drawer to become visible. Idempotent: opening an
    /// already-open cart leaves it open.
    pub fn open(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.open = true;
    }

    /// Signal the cart drawer to close. Idempotent.
    pub fn close(&self) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.open = false;
    }

    /// Whether the cart drawer is currently visible.
    #[must_use]
    pub fn is_open(&self) -> bool {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.open
    }
}
