//! Catalog Fixtures

use jiff::Timestamp;
use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, USD},
};
use serde::Deserialize;

use crate::{fixtures::FixtureError, listings::Listing};

/// Wrapper for catalog listings in YAML.
///
/// Listings are a sequence, not a map: catalog order decides price ties.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Listings in catalog order
    pub listings: Vec<ListingFixture>,
}

/// Listing Fixture
#[derive(Debug, Deserialize)]
pub struct ListingFixture {
    /// Listing identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Unit price (e.g., "1.20 EUR")
    pub price: String,

    /// Vendor name
    pub vendor: String,

    /// When the listing was added (RFC 3339, e.g. "2024-05-01T09:00:00Z")
    pub date_added: Timestamp,
}

impl TryFrom<ListingFixture> for Listing<'_> {
    type Error = FixtureError;

    fn try_from(fixture: ListingFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price)?;

        Ok(Listing::new(
            fixture.id,
            fixture.name,
            Money::from_minor(minor_units, currency),
            fixture.vendor,
            fixture.date_added,
        ))
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let mut parts = s.split_whitespace();

    let (Some(amount), Some(currency_code), None) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let minor_units = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
