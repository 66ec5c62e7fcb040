//! Vendor Bundles

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};

use crate::{
    items::RequestedItem,
    listings::Listing,
    pricing::{PricingError, line_total, sum},
};

/// A shopping list line priced against the listing chosen for it.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizedLine<'a> {
    product_name: String,
    quantity: u32,
    price_per_unit: Money<'a, Currency>,
    total_price: Money<'a, Currency>,
    vendor: String,
    original_item: RequestedItem<'a>,
}

impl<'a> OptimizedLine<'a> {
    /// Price a shopping list line at the given listing.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the line total overflows.
    pub fn new(item: &RequestedItem<'a>, listing: &Listing<'a>) -> Result<Self, PricingError> {
        Ok(Self {
            product_name: item.product_name().to_string(),
            quantity: item.quantity(),
            price_per_unit: *listing.price(),
            total_price: line_total(listing.price(), item.quantity())?,
            vendor: listing.vendor().to_string(),
            original_item: item.clone(),
        })
    }

    /// Requested product name
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Requested quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Unit price of the chosen listing
    pub fn price_per_unit(&self) -> Money<'a, Currency> {
        self.price_per_unit
    }

    /// `price_per_unit x quantity`
    pub fn total_price(&self) -> Money<'a, Currency> {
        self.total_price
    }

    /// Vendor of the chosen listing
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// The shopping list line this was priced from
    pub fn original_item(&self) -> &RequestedItem<'a> {
        &self.original_item
    }
}

/// Lines bought from one vendor.
#[derive(Clone, Debug, PartialEq)]
pub struct VendorBundle<'a> {
    vendor_name: String,
    items: Vec<OptimizedLine<'a>>,
    total_cost: Money<'a, Currency>,
    item_count: u64,
}

impl<'a> VendorBundle<'a> {
    /// Create a bundle, totalling the line prices and quantities.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line is priced in another currency.
    pub fn new(
        vendor_name: impl Into<String>,
        items: Vec<OptimizedLine<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, PricingError> {
        let total_cost = sum(items.iter().map(OptimizedLine::total_price), currency)?;
        let item_count = items.iter().map(|line| u64::from(line.quantity())).sum();

        Ok(Self {
            vendor_name: vendor_name.into(),
            items,
            total_cost,
            item_count,
        })
    }

    /// Vendor the bundle is bought from
    pub fn vendor_name(&self) -> &str {
        &self.vendor_name
    }

    /// Lines in the bundle
    pub fn items(&self) -> &[OptimizedLine<'a>] {
        &self.items
    }

    /// Sum of the line totals
    pub fn total_cost(&self) -> Money<'a, Currency> {
        self.total_cost
    }

    /// Sum of the line quantities
    pub fn item_count(&self) -> u64 {
        self.item_count
    }
}

/// Group lines into one bundle per vendor, in the order each vendor first appears.
///
/// # Errors
///
/// Returns a [`PricingError`] if a bundle cannot be totalled.
pub fn group_by_vendor<'a>(
    lines: impl IntoIterator<Item = OptimizedLine<'a>>,
    currency: &'a Currency,
) -> Result<Vec<VendorBundle<'a>>, PricingError> {
    let mut groups: Vec<(String, Vec<OptimizedLine<'a>>)> = Vec::new();
    let mut positions: FxHashMap<String, usize> = FxHashMap::default();

    for line in lines {
        let position = *positions
            .entry(line.vendor().to_string())
            .or_insert_with(|| {
                groups.push((line.vendor().to_string(), Vec::new()));
                groups.len() - 1
            });

        if let Some((_, group)) = groups.get_mut(position) {
            group.push(line);
        }
    }

    groups
        .into_iter()
        .map(|(vendor, lines)| VendorBundle::new(vendor, lines, currency))
        .collect()
}
