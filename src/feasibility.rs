//! Feasibility

use crate::{index::CatalogIndex, items::RequestedItem};

/// Shopping list lines split by whether any listing exists for them.
#[derive(Debug)]
pub struct Feasibility<'i, 'a> {
    available: Vec<&'i RequestedItem<'a>>,
    unavailable: Vec<&'i RequestedItem<'a>>,
}

impl<'i, 'a> Feasibility<'i, 'a> {
    /// Partition the shopping list against the catalog index, preserving list order.
    pub fn partition(
        shopping_list: &'i [RequestedItem<'a>],
        index: &CatalogIndex<'_, '_>,
    ) -> Self {
        let (available, unavailable): (Vec<_>, Vec<_>) = shopping_list
            .iter()
            .partition(|item| index.contains(item.product_name()));

        Self {
            available,
            unavailable,
        }
    }

    /// Lines with at least one listing.
    pub fn available(&self) -> &[&'i RequestedItem<'a>] {
        &self.available
    }

    /// Lines no vendor carries.
    pub fn unavailable(&self) -> &[&'i RequestedItem<'a>] {
        &self.unavailable
    }

    /// Whether no line can be bought anywhere.
    pub fn nothing_available(&self) -> bool {
        self.available.is_empty()
    }
}
