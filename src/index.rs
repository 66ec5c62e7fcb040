//! Catalog Index
//!
//! Groups catalog listings by product name. Groups keep the order in which their first
//! listing was seen, and listings inside a group keep catalog order, so every "first
//! minimum wins" tie-break downstream follows the catalog.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::{config::NameMatching, listings::Listing};

/// Listings sharing a product name, in catalog order.
type ListingGroup<'c, 'a> = SmallVec<[&'c Listing<'a>; 4]>;

/// Mapping from product name to the listings for that name.
#[derive(Debug)]
pub struct CatalogIndex<'c, 'a> {
    groups: Vec<ListingGroup<'c, 'a>>,
    positions: FxHashMap<String, usize>,
    matching: NameMatching,
}

impl<'c, 'a> CatalogIndex<'c, 'a> {
    /// Build the index in a single pass over the listings.
    ///
    /// Listings with the same name and vendor are all retained.
    pub fn build(
        listings: impl IntoIterator<Item = &'c Listing<'a>>,
        matching: NameMatching,
    ) -> Self {
        let mut groups: Vec<ListingGroup<'c, 'a>> = Vec::new();
        let mut positions: FxHashMap<String, usize> = FxHashMap::default();

        for listing in listings {
            let key = matching.key(listing.name());

            let position = if let Some(&position) = positions.get(&*key) {
                position
            } else {
                let position = groups.len();

                positions.insert(key.into_owned(), position);
                groups.push(SmallVec::new());

                position
            };

            if let Some(group) = groups.get_mut(position) {
                group.push(listing);
            }
        }

        Self {
            groups,
            positions,
            matching,
        }
    }

    /// Listings for a product name, in catalog order. Empty if the name is unknown.
    pub fn listings_for(&self, name: &str) -> &[&'c Listing<'a>] {
        self.positions
            .get(&*self.matching.key(name))
            .and_then(|&position| self.groups.get(position))
            .map(SmallVec::as_slice)
            .unwrap_or_default()
    }

    /// Whether at least one listing exists for the product name.
    pub fn contains(&self, name: &str) -> bool {
        !self.listings_for(name).is_empty()
    }

    /// Every distinct vendor, in the order first seen walking groups then listings.
    pub fn vendors(&self) -> Vec<&'c str> {
        let mut seen = FxHashSet::default();

        self.groups
            .iter()
            .flatten()
            .map(|&listing| listing.vendor())
            .filter(|vendor| seen.insert(*vendor))
            .collect()
    }

    /// Number of distinct product names.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the index has no products.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
