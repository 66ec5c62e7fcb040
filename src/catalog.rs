//! Catalog

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::listings::Listing;

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A listing's currency differs from the catalog currency (index, listing currency, catalog currency).
    #[error("Listing {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),

    /// A listing has a price below zero.
    #[error("Listing {id} has a negative price")]
    NegativePrice {
        /// Identifier of the offending listing
        id: String,
    },
}

/// A snapshot of every listing offered by every vendor, in a single currency.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    listings: Vec<Listing<'a>>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a new empty catalog.
    pub fn new(currency: &'static Currency) -> Self {
        Catalog {
            listings: Vec::new(),
            currency,
        }
    }

    /// Create a new catalog with the given listings, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if a listing is priced in another currency or below zero.
    pub fn with_listings(
        listings: impl Into<Vec<Listing<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let listings = listings.into();

        listings
            .iter()
            .enumerate()
            .try_for_each(|(i, listing)| check_listing(i, listing, currency))?;

        Ok(Catalog { listings, currency })
    }

    /// Append a listing to the catalog.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` if the listing is priced in another currency or below zero.
    pub fn push(&mut self, listing: Listing<'a>) -> Result<(), CatalogError> {
        check_listing(self.listings.len(), &listing, self.currency)?;

        self.listings.push(listing);

        Ok(())
    }

    /// Iterate over the listings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Listing<'a>> {
        self.listings.iter()
    }

    /// Get the number of listings in the catalog.
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Get the currency of the catalog.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

fn check_listing(
    index: usize,
    listing: &Listing<'_>,
    currency: &'static Currency,
) -> Result<(), CatalogError> {
    let listing_currency = listing.price().currency();

    if listing_currency != currency {
        return Err(CatalogError::CurrencyMismatch(
            index,
            listing_currency.iso_alpha_code,
            currency.iso_alpha_code,
        ));
    }

    if listing.price().is_negative() {
        return Err(CatalogError::NegativePrice {
            id: listing.id().to_string(),
        });
    }

    Ok(())
}
