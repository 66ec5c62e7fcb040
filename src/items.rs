//! Items

use rusty_money::{Money, iso::Currency};

/// One line of a shopping list.
///
/// `price_per_unit` and `vendor` record where the product was picked when the line was
/// added to the list. The optimizer only reads `product_name` and `quantity`; both
/// strategies price lines from the catalog.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestedItem<'a> {
    product_id: String,
    product_name: String,
    quantity: u32,
    price_per_unit: Money<'a, Currency>,
    vendor: String,
}

impl<'a> RequestedItem<'a> {
    /// Creates a new shopping list line.
    pub fn new(
        product_id: impl Into<String>,
        product_name: impl Into<String>,
        quantity: u32,
        price_per_unit: Money<'a, Currency>,
        vendor: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            price_per_unit,
            vendor: vendor.into(),
        }
    }

    /// Returns the catalog identifier of the product picked for this line
    pub fn product_id(&self) -> &str {
        &self.product_id
    }

    /// Returns the requested product name
    pub fn product_name(&self) -> &str {
        &self.product_name
    }

    /// Returns the requested quantity
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the unit price recorded when the line was added
    pub fn price_per_unit(&self) -> &Money<'a, Currency> {
        &self.price_per_unit
    }

    /// Returns the vendor recorded when the line was added
    pub fn vendor(&self) -> &str {
        &self.vendor
    }
}
