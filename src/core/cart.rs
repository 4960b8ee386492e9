use crate::domain::model::{CartLine, CatalogItem, ProductId};
use std::sync::Arc;

/// Ordered cart lines, at most one per product. A line never holds a
/// quantity below 1; dropping to zero removes it.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines, as shown on the cart badge.
    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    pub fn quantity_of(&self, id: ProductId) -> Option<u32> {
        self.position(id).map(|index| self.lines[index].quantity)
    }

    /// Merges into an existing line or appends a new one.
    pub fn add(&mut self, item: Arc<CatalogItem>, quantity: u32) {
        if quantity == 0 {
            tracing::debug!("Ignoring zero-quantity add for product {}", item.id);
            return;
        }

        match self.position(item.id) {
            Some(index) => {
                let line = &mut self.lines[index];
                line.quantity = line.quantity.saturating_add(quantity);
            }
            None => self.lines.push(CartLine { item, quantity }),
        }
    }

    /// Replaces the line's quantity; anything at or below zero removes it.
    /// Unknown ids are ignored.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) {
        let Some(index) = self.position(id) else {
            return;
        };

        if quantity <= 0 {
            self.lines.remove(index);
        } else {
            self.lines[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        }
    }

    pub fn remove_all(&mut self, id: ProductId) {
        self.lines.retain(|line| line.item.id != id);
    }

    pub fn total(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).fold(0, u64::saturating_add)
    }

    fn position(&self, id: ProductId) -> Option<usize> {
        self.lines.iter().position(|line| line.item.id == id)
    }
}
