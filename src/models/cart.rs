use serde::{Deserialize, Serialize};

use crate::models::dish::Dish;

/// The customer's order for the current session. An ordered sequence of
/// dishes; adding the same dish twice yields two independent entries. The
/// total is always derived from the current contents, never stored, so it
/// cannot drift out of sync with the items.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<Dish>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a dish. Always succeeds; no uniqueness check, no quantity
    /// field.
    pub fn add(&mut self, dish: Dish) {
        self.items.push(dish);
    }

    /// Remove every entry whose id matches. Returns the number of entries
    /// removed. Entries with other ids are untouched and keep their order.
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        before - self.items.len()
    }

    /// Sum of the current entries, recomputed on every call.
    pub fn total(&self) -> u32 {
        self.items.iter().map(|item| item.price).sum()
    }

    pub fn items(&self) -> &[Dish] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Freeze the current contents into the by-value parameter handed to
    /// the next screen.
    pub fn snapshot(&self) -> CheckoutSnapshot {
        CheckoutSnapshot::of(self.items.clone())
    }
}

/// Immutable copy of a cart carried across a screen transition. The
/// destination screen observes this snapshot, not the live cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSnapshot {
    pub items: Vec<Dish>,
    pub total: u32,
}

impl CheckoutSnapshot {
    /// Snapshot a list of dishes; the total is computed from the items so
    /// the two can never disagree.
    pub fn of(items: Vec<Dish>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self { items, total }
    }

    pub fn empty() -> Self {
        Self::of(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
