//! Optimization Result

use decimal_percentage::Percentage;
use rusty_money::{Money, iso::Currency};

use crate::{
    bundles::VendorBundle,
    items::RequestedItem,
    pricing::{PricingError, sum},
};

/// How much of the shopping list the catalog covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coverage {
    /// Every line has at least one listing.
    FullyCovered,

    /// Some lines have no listing; strategies cover the rest.
    PartiallyCovered,

    /// No line has a listing.
    NothingAvailable,
}

/// Both purchasing strategies for a shopping list, and what they cost.
#[derive(Clone, Debug, PartialEq)]
pub struct OptimizationResult<'a> {
    best_single_vendor: Option<VendorBundle<'a>>,
    multi_vendor_bundles: Vec<VendorBundle<'a>>,
    single_vendor_total: Money<'a, Currency>,
    multi_vendor_total: Money<'a, Currency>,
    savings: Money<'a, Currency>,
    unavailable_items: Vec<RequestedItem<'a>>,
    currency: &'a Currency,
}

impl<'a> OptimizationResult<'a> {
    /// A zero-cost result where nothing could be bought.
    pub fn nothing_available(
        unavailable_items: Vec<RequestedItem<'a>>,
        currency: &'a Currency,
    ) -> Self {
        let zero = Money::from_minor(0, currency);

        Self {
            best_single_vendor: None,
            multi_vendor_bundles: Vec::new(),
            single_vendor_total: zero,
            multi_vendor_total: zero,
            savings: zero,
            unavailable_items,
            currency,
        }
    }

    /// Combine both strategies into a result.
    ///
    /// The single-vendor total is zero without a single vendor, and savings never go
    /// below zero.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a bundle is priced in another currency.
    pub fn aggregate(
        best_single_vendor: Option<VendorBundle<'a>>,
        multi_vendor_bundles: Vec<VendorBundle<'a>>,
        unavailable_items: Vec<RequestedItem<'a>>,
        currency: &'a Currency,
    ) -> Result<Self, PricingError> {
        let multi_vendor_total = sum(
            multi_vendor_bundles.iter().map(VendorBundle::total_cost),
            currency,
        )?;

        let single_vendor_total = best_single_vendor
            .as_ref()
            .map_or(Money::from_minor(0, currency), VendorBundle::total_cost);

        let difference = single_vendor_total.sub(multi_vendor_total)?;

        let savings = if difference.is_positive() {
            difference
        } else {
            Money::from_minor(0, currency)
        };

        Ok(Self {
            best_single_vendor,
            multi_vendor_bundles,
            single_vendor_total,
            multi_vendor_total,
            savings,
            unavailable_items,
            currency,
        })
    }

    /// Cheapest vendor carrying every available line, if there is one
    pub fn best_single_vendor(&self) -> Option<&VendorBundle<'a>> {
        self.best_single_vendor.as_ref()
    }

    /// One bundle per vendor used when each line is bought where it is cheapest
    pub fn multi_vendor_bundles(&self) -> &[VendorBundle<'a>] {
        &self.multi_vendor_bundles
    }

    /// Total of the best single vendor, zero if there is none
    pub fn single_vendor_total(&self) -> Money<'a, Currency> {
        self.single_vendor_total
    }

    /// Total across all multi-vendor bundles
    pub fn multi_vendor_total(&self) -> Money<'a, Currency> {
        self.multi_vendor_total
    }

    /// How much splitting the list saves over the best single vendor, never negative
    pub fn savings(&self) -> Money<'a, Currency> {
        self.savings
    }

    /// Lines no vendor carries, in list order
    pub fn unavailable_items(&self) -> &[RequestedItem<'a>] {
        &self.unavailable_items
    }

    /// Currency of every amount in the result
    pub fn currency(&self) -> &'a Currency {
        self.currency
    }

    /// Savings as a fraction of the single-vendor total.
    ///
    /// Zero when there is no single-vendor total to compare against.
    pub fn savings_percent(&self) -> Percentage {
        let single = *self.single_vendor_total.amount();

        if single.is_zero() {
            return Percentage::from(0.0);
        }

        Percentage::from(*self.savings.amount() / single)
    }

    /// How much of the list the catalog covers.
    ///
    /// An empty shopping list buys nothing, so it reports
    /// [`Coverage::NothingAvailable`] rather than [`Coverage::FullyCovered`].
    pub fn coverage(&self) -> Coverage {
        match (
            self.multi_vendor_bundles.is_empty(),
            self.unavailable_items.is_empty(),
        ) {
            (true, _) => Coverage::NothingAvailable,
            (false, true) => Coverage::FullyCovered,
            (false, false) => Coverage::PartiallyCovered,
        }
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{bundles::OptimizedLine, listings::Listing};

    use super::*;

    fn bundle(
        vendor: &str,
        lines: &[(&str, u32, i64)],
    ) -> Result<VendorBundle<'static>, PricingError> {
        let lines = lines
            .iter()
            .map(|&(name, quantity, minor)| {
                let item =
                    RequestedItem::new(name, name, quantity, Money::from_minor(0, iso::EUR), "");
                let listing = Listing::new(
                    name,
                    name,
                    Money::from_minor(minor, iso::EUR),
                    vendor,
                    Timestamp::UNIX_EPOCH,
                );

                OptimizedLine::new(&item, &listing)
            })
            .collect::<Result<Vec<_>, _>>()?;

        VendorBundle::new(vendor, lines, iso::EUR)
    }

    #[test]
    fn aggregate_computes_totals_and_savings() -> TestResult {
        let single = bundle("B", &[("Milk", 2, 120), ("Bread", 1, 200)])?;
        let multi = vec![
            bundle("A", &[("Milk", 2, 100)])?,
            bundle("B", &[("Bread", 1, 200)])?,
        ];

        let result = OptimizationResult::aggregate(Some(single), multi, Vec::new(), iso::EUR)?;

        assert_eq!(result.single_vendor_total(), Money::from_minor(440, iso::EUR));
        assert_eq!(result.multi_vendor_total(), Money::from_minor(400, iso::EUR));
        assert_eq!(result.savings(), Money::from_minor(40, iso::EUR));
        assert_eq!(result.coverage(), Coverage::FullyCovered);

        Ok(())
    }

    #[test]
    fn savings_are_zero_without_single_vendor() -> TestResult {
        let multi = vec![
            bundle("A", &[("Milk", 1, 100)])?,
            bundle("B", &[("Bread", 1, 200)])?,
        ];

        let result = OptimizationResult::aggregate(None, multi, Vec::new(), iso::EUR)?;

        assert_eq!(result.single_vendor_total(), Money::from_minor(0, iso::EUR));
        assert_eq!(result.multi_vendor_total(), Money::from_minor(300, iso::EUR));
        assert_eq!(result.savings(), Money::from_minor(0, iso::EUR));
        assert_eq!(result.savings_percent(), Percentage::from(0.0));
        assert_eq!(result.coverage(), Coverage::FullyCovered);

        Ok(())
    }

    #[test]
    fn savings_never_go_negative() -> TestResult {
        let single = bundle("A", &[("Milk", 1, 100)])?;
        let multi = vec![bundle("B", &[("Milk", 1, 150)])?];

        let result = OptimizationResult::aggregate(Some(single), multi, Vec::new(), iso::EUR)?;

        assert_eq!(result.savings(), Money::from_minor(0, iso::EUR));

        Ok(())
    }

    #[test]
    fn savings_percent_is_relative_to_single_vendor_total() -> TestResult {
        let single = bundle("A", &[("Milk", 1, 400)])?;
        let multi = vec![bundle("B", &[("Milk", 1, 300)])?];

        let result = OptimizationResult::aggregate(Some(single), multi, Vec::new(), iso::EUR)?;

        assert_eq!(result.savings_percent(), Percentage::from(0.25));

        Ok(())
    }

    #[test]
    fn partially_covered_when_items_are_missing() -> TestResult {
        let missing = RequestedItem::new("x", "Caviar", 1, Money::from_minor(0, iso::EUR), "");
        let multi = vec![bundle("A", &[("Milk", 1, 100)])?];

        let result = OptimizationResult::aggregate(None, multi, vec![missing], iso::EUR)?;

        assert_eq!(result.coverage(), Coverage::PartiallyCovered);
        assert_eq!(result.unavailable_items().len(), 1);

        Ok(())
    }

    #[test]
    fn nothing_available_is_zero_cost() {
        let missing = RequestedItem::new("x", "Caviar", 1, Money::from_minor(0, iso::EUR), "");

        let result = OptimizationResult::nothing_available(vec![missing], iso::EUR);

        assert!(result.best_single_vendor().is_none());
        assert!(result.multi_vendor_bundles().is_empty());
        assert_eq!(result.single_vendor_total(), Money::from_minor(0, iso::EUR));
        assert_eq!(result.multi_vendor_total(), Money::from_minor(0, iso::EUR));
        assert_eq!(result.savings(), Money::from_minor(0, iso::EUR));
        assert_eq!(result.coverage(), Coverage::NothingAvailable);
    }
}
