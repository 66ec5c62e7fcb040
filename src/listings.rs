//! Listings

use jiff::Timestamp;
use rusty_money::{Money, iso::Currency};

/// One vendor's priced offering of a named product.
#[derive(Clone, Debug, PartialEq)]
pub struct Listing<'a> {
    id: String,
    name: String,
    price: Money<'a, Currency>,
    vendor: String,
    date_added: Timestamp,
}

impl<'a> Listing<'a> {
    /// Creates a new listing.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: Money<'a, Currency>,
        vendor: impl Into<String>,
        date_added: Timestamp,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            vendor: vendor.into(),
            date_added,
        }
    }

    /// Returns the catalog identifier of the listing
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the product name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }

    /// Returns the name of the vendor offering this listing
    pub fn vendor(&self) -> &str {
        &self.vendor
    }

    /// Returns when the listing was added to the catalog
    pub fn date_added(&self) -> Timestamp {
        self.date_added
    }
}

/// Returns the cheapest listing, the first one encountered on equal prices.
pub fn cheapest_listing<'l, 'a: 'l>(
    listings: impl IntoIterator<Item = &'l Listing<'a>>,
) -> Option<&'l Listing<'a>> {
    listings
        .into_iter()
        .min_by_key(|listing| *listing.price().amount())
}
