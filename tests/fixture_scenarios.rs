//! Integration tests for the bundled fixture sets.
//!
//! `groceries`: Corner Market only sells milk, so it cannot take the whole list.
//! ValueMart is the cheapest complete vendor at €7.25 (milk €2.30, bread €2.15,
//! eggs €2.80). Splitting buys milk at Corner Market (€2.00), bread at FreshCo
//! (€2.00) and eggs at ValueMart (€2.80) for €6.80, saving €0.45. Nobody sells
//! saffron.

use rusty_money::{Money, iso::EUR};
use testresult::TestResult;

use cartwise::{
    bundles::VendorBundle,
    config::{NameMatching, OptimizerConfig},
    fixtures::Fixture,
    optimizer::{Optimizer, optimize},
    result::Coverage,
};

fn vendor_names<'r>(bundles: &'r [VendorBundle<'_>]) -> Vec<&'r str> {
    bundles.iter().map(VendorBundle::vendor_name).collect()
}

#[test]
fn groceries_prefers_split_purchase() -> TestResult {
    let fixture = Fixture::from_set("groceries")?;
    let catalog = fixture.catalog()?;

    let result = optimize(fixture.shopping_list(), &catalog)?;

    let single = result.best_single_vendor().ok_or("expected a single vendor")?;

    assert_eq!(single.vendor_name(), "ValueMart");
    assert_eq!(single.item_count(), 4);
    assert_eq!(result.single_vendor_total(), Money::from_minor(725, EUR));

    assert_eq!(
        vendor_names(result.multi_vendor_bundles()),
        ["Corner Market", "FreshCo", "ValueMart"]
    );
    assert_eq!(result.multi_vendor_total(), Money::from_minor(680, EUR));
    assert_eq!(result.savings(), Money::from_minor(45, EUR));

    assert_eq!(result.unavailable_items().len(), 1);
    assert_eq!(
        result.unavailable_items().first().map(|item| item.product_name()),
        Some("Saffron")
    );
    assert_eq!(result.coverage(), Coverage::PartiallyCovered);

    Ok(())
}

#[test]
fn milk_and_bread_saves_forty_cents() -> TestResult {
    let fixture = Fixture::from_set("milk_and_bread")?;
    let catalog = fixture.catalog()?;

    let result = optimize(fixture.shopping_list(), &catalog)?;

    assert_eq!(
        result.best_single_vendor().map(|bundle| bundle.vendor_name()),
        Some("B")
    );
    assert_eq!(result.single_vendor_total(), Money::from_minor(440, EUR));
    assert_eq!(result.multi_vendor_total(), Money::from_minor(400, EUR));
    assert_eq!(result.savings(), Money::from_minor(40, EUR));
    assert_eq!(vendor_names(result.multi_vendor_bundles()), ["A", "B"]);
    assert_eq!(result.coverage(), Coverage::FullyCovered);

    Ok(())
}

#[test]
fn ties_go_to_the_first_listing_and_vendor() -> TestResult {
    let fixture = Fixture::from_set("ties")?;
    let catalog = fixture.catalog()?;

    let result = optimize(fixture.shopping_list(), &catalog)?;

    assert_eq!(
        result.best_single_vendor().map(|bundle| bundle.vendor_name()),
        Some("North")
    );

    // Sugar is listed at South first, so the split buys it there.
    assert_eq!(vendor_names(result.multi_vendor_bundles()), ["North", "South"]);
    assert_eq!(result.multi_vendor_total(), Money::from_minor(300, EUR));
    assert_eq!(result.savings(), Money::from_minor(0, EUR));

    Ok(())
}

#[test]
fn mixed_case_uses_configured_matching() -> TestResult {
    let fixture = Fixture::from_set("mixed_case")?;
    let catalog = fixture.catalog()?;

    assert_eq!(
        fixture.config().name_matching,
        NameMatching::CaseInsensitive
    );

    let result =
        Optimizer::new(fixture.config().clone()).optimize(fixture.shopping_list(), &catalog)?;

    assert_eq!(
        result.best_single_vendor().map(|bundle| bundle.vendor_name()),
        Some("A")
    );
    assert_eq!(result.single_vendor_total(), Money::from_minor(700, EUR));
    assert_eq!(vendor_names(result.multi_vendor_bundles()), ["B", "A"]);
    assert_eq!(result.multi_vendor_total(), Money::from_minor(680, EUR));
    assert_eq!(result.savings(), Money::from_minor(20, EUR));
    assert!(result.unavailable_items().is_empty());

    Ok(())
}

#[test]
fn mixed_case_with_exact_matching_misses_items() -> TestResult {
    let fixture = Fixture::from_set("mixed_case")?;
    let catalog = fixture.catalog()?;

    let result = Optimizer::new(OptimizerConfig {
        name_matching: NameMatching::Exact,
    })
    .optimize(fixture.shopping_list(), &catalog)?;

    assert_eq!(
        result.best_single_vendor().map(|bundle| bundle.vendor_name()),
        Some("B")
    );
    assert_eq!(result.multi_vendor_total(), Money::from_minor(450, EUR));
    assert_eq!(result.unavailable_items().len(), 1);
    assert_eq!(
        result.unavailable_items().first().map(|item| item.product_name()),
        Some("OAT MILK")
    );

    Ok(())
}

#[test]
fn out_of_stock_is_a_zero_cost_result() -> TestResult {
    let fixture = Fixture::from_set("out_of_stock")?;
    let catalog = fixture.catalog()?;

    let result = optimize(fixture.shopping_list(), &catalog)?;

    assert!(result.best_single_vendor().is_none());
    assert!(result.multi_vendor_bundles().is_empty());
    assert_eq!(result.single_vendor_total(), Money::from_minor(0, EUR));
    assert_eq!(result.multi_vendor_total(), Money::from_minor(0, EUR));
    assert_eq!(result.savings(), Money::from_minor(0, EUR));
    assert_eq!(result.unavailable_items(), fixture.shopping_list());
    assert_eq!(result.coverage(), Coverage::NothingAvailable);

    Ok(())
}
