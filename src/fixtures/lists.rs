//! Shopping List Fixtures

use rusty_money::Money;
use serde::Deserialize;

use crate::{
    fixtures::{FixtureError, catalogs::parse_price},
    items::RequestedItem,
};

/// Wrapper for shopping list lines in YAML
#[derive(Debug, Deserialize)]
pub struct ListFixture {
    /// Lines in list order
    pub items: Vec<RequestedItemFixture>,
}

/// Shopping list line fixture
#[derive(Debug, Deserialize)]
pub struct RequestedItemFixture {
    /// Identifier of the listing the line was picked from
    pub product_id: String,

    /// Product name
    pub product_name: String,

    /// Requested quantity
    pub quantity: u32,

    /// Unit price when the line was picked (e.g., "1.20 EUR")
    pub price_per_unit: String,

    /// Vendor the line was picked from
    pub vendor: String,
}

impl TryFrom<RequestedItemFixture> for RequestedItem<'_> {
    type Error = FixtureError;

    fn try_from(fixture: RequestedItemFixture) -> Result<Self, Self::Error> {
        let (minor_units, currency) = parse_price(&fixture.price_per_unit)?;

        Ok(RequestedItem::new(
            fixture.product_id,
            fixture.product_name,
            fixture.quantity,
            Money::from_minor(minor_units, currency),
            fixture.vendor,
        ))
    }
}
