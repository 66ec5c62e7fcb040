//! Single-Vendor Strategy
//!
//! Buys the whole list from one vendor. A vendor is only a candidate if it carries every
//! available line; vendors missing even one line are dropped rather than partially
//! credited.

use rusty_money::iso::Currency;
use tracing::debug;

use crate::{
    bundles::{OptimizedLine, VendorBundle},
    index::CatalogIndex,
    items::RequestedItem,
    listings::cheapest_listing,
    pricing::PricingError,
};

/// Every vendor able to supply all available lines, in vendor enumeration order.
///
/// Each line is priced at the vendor's cheapest listing for it. Returns no options when
/// there are no available lines.
///
/// # Errors
///
/// Returns a [`PricingError`] if a line or bundle total cannot be calculated.
pub fn single_vendor_options<'a>(
    available: &[&RequestedItem<'a>],
    index: &CatalogIndex<'_, 'a>,
    currency: &'a Currency,
) -> Result<Vec<VendorBundle<'a>>, PricingError> {
    if available.is_empty() {
        return Ok(Vec::new());
    }

    let mut options = Vec::new();

    for vendor in index.vendors() {
        if let Some(bundle) = vendor_bundle(vendor, available, index, currency)? {
            options.push(bundle);
        }
    }

    Ok(options)
}

/// The cheapest vendor able to supply all available lines, if any.
///
/// On equal totals the vendor enumerated first wins.
///
/// # Errors
///
/// Returns a [`PricingError`] if a line or bundle total cannot be calculated.
pub fn best_single_vendor<'a>(
    available: &[&RequestedItem<'a>],
    index: &CatalogIndex<'_, 'a>,
    currency: &'a Currency,
) -> Result<Option<VendorBundle<'a>>, PricingError> {
    let best = single_vendor_options(available, index, currency)?
        .into_iter()
        .reduce(|best, current| {
            if current.total_cost().amount() < best.total_cost().amount() {
                current
            } else {
                best
            }
        });

    if let Some(bundle) = &best {
        debug!(
            vendor = bundle.vendor_name(),
            total = %bundle.total_cost(),
            "selected single vendor"
        );
    } else {
        debug!("no single vendor carries every available item");
    }

    Ok(best)
}

fn vendor_bundle<'a>(
    vendor: &str,
    available: &[&RequestedItem<'a>],
    index: &CatalogIndex<'_, 'a>,
    currency: &'a Currency,
) -> Result<Option<VendorBundle<'a>>, PricingError> {
    let mut lines = Vec::with_capacity(available.len());

    for &item in available {
        let vendor_listings = index
            .listings_for(item.product_name())
            .iter()
            .copied()
            .filter(|listing| listing.vendor() == vendor);

        let Some(listing) = cheapest_listing(vendor_listings) else {
            debug!(vendor, missing = item.product_name(), "vendor cannot supply list");

            return Ok(None);
        };

        lines.push(OptimizedLine::new(item, listing)?);
    }

    VendorBundle::new(vendor, lines, currency).map(Some)
}
