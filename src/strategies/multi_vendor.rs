//! Multi-Vendor Strategy

use rusty_money::iso::Currency;
use tracing::debug;

use crate::{
    bundles::{OptimizedLine, VendorBundle, group_by_vendor},
    index::CatalogIndex,
    items::RequestedItem,
    listings::cheapest_listing,
    pricing::PricingError,
};

/// Price every available line at its cheapest listing across all vendors.
///
/// Lines are returned in list order. A line without listings is skipped.
///
/// # Errors
///
/// Returns a [`PricingError`] if a line total overflows.
pub fn cheapest_lines<'a>(
    available: &[&RequestedItem<'a>],
    index: &CatalogIndex<'_, 'a>,
) -> Result<Vec<OptimizedLine<'a>>, PricingError> {
    available
        .iter()
        .filter_map(|&item| {
            cheapest_listing(index.listings_for(item.product_name()).iter().copied())
                .map(|listing| OptimizedLine::new(item, listing))
        })
        .collect()
}

/// Buy each available line wherever it is cheapest, bundled by vendor.
///
/// # Errors
///
/// Returns a [`PricingError`] if a line or bundle total cannot be calculated.
pub fn multi_vendor_bundles<'a>(
    available: &[&RequestedItem<'a>],
    index: &CatalogIndex<'_, 'a>,
    currency: &'a Currency,
) -> Result<Vec<VendorBundle<'a>>, PricingError> {
    let bundles = group_by_vendor(cheapest_lines(available, index)?, currency)?;

    debug!(vendors = bundles.len(), "split list across vendors");

    Ok(bundles)
}
