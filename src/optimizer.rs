//! Optimizer
//!
//! Runs the whole pipeline for one shopping list: index the catalog, partition the
//! list, evaluate both strategies and aggregate. Nothing is shared between calls, so
//! the same inputs always produce the same result.

use thiserror::Error;
use tracing::debug;

use crate::{
    catalog::Catalog,
    config::OptimizerConfig,
    feasibility::Feasibility,
    index::CatalogIndex,
    items::RequestedItem,
    pricing::PricingError,
    result::OptimizationResult,
    strategies::{best_single_vendor, multi_vendor_bundles},
};

/// Errors returned for shopping lists that cannot be optimized.
#[derive(Debug, Error, PartialEq)]
pub enum OptimizeError {
    /// A shopping list line asks for nothing.
    #[error("Item {index} ({product_name}) has quantity 0")]
    InvalidQuantity {
        /// Position of the line in the shopping list
        index: usize,
        /// Requested product name
        product_name: String,
    },

    /// Wrapped line or bundle pricing error.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

/// Price optimizer for shopping lists.
#[derive(Debug, Clone, Default)]
pub struct Optimizer {
    config: OptimizerConfig,
}

impl Optimizer {
    /// Create an optimizer with the given settings.
    pub fn new(config: OptimizerConfig) -> Self {
        Self { config }
    }

    /// Settings in use.
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Compare buying the list from the cheapest single vendor against buying each line
    /// wherever it is cheapest.
    ///
    /// An empty catalog, an empty list or a list nobody stocks all produce a zero-cost
    /// result rather than an error.
    ///
    /// # Errors
    ///
    /// - [`OptimizeError::InvalidQuantity`]: a line has quantity 0.
    /// - [`OptimizeError::Pricing`]: a line total does not fit in minor units.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(
            requested = shopping_list.len(),
            listings = catalog.len(),
            matching = ?self.config.name_matching
        )
    )]
    pub fn optimize<'a>(
        &self,
        shopping_list: &[RequestedItem<'a>],
        catalog: &Catalog<'a>,
    ) -> Result<OptimizationResult<'a>, OptimizeError> {
        validate_quantities(shopping_list)?;

        let currency = catalog.currency();
        let index = CatalogIndex::build(catalog.iter(), self.config.name_matching);
        let feasibility = Feasibility::partition(shopping_list, &index);

        debug!(
            products = index.len(),
            available = feasibility.available().len(),
            unavailable = feasibility.unavailable().len(),
            "partitioned shopping list"
        );

        let unavailable_items = feasibility
            .unavailable()
            .iter()
            .map(|&item| item.clone())
            .collect();

        if feasibility.nothing_available() {
            return Ok(OptimizationResult::nothing_available(
                unavailable_items,
                currency,
            ));
        }

        let single = best_single_vendor(feasibility.available(), &index, currency)?;
        let multi = multi_vendor_bundles(feasibility.available(), &index, currency)?;

        let result = OptimizationResult::aggregate(single, multi, unavailable_items, currency)?;

        debug!(
            single_vendor_total = %result.single_vendor_total(),
            multi_vendor_total = %result.multi_vendor_total(),
            savings = %result.savings(),
            "optimized shopping list"
        );

        Ok(result)
    }
}

/// Optimize a shopping list with the default settings.
///
/// # Errors
///
/// See [`Optimizer::optimize`].
pub fn optimize<'a>(
    shopping_list: &[RequestedItem<'a>],
    catalog: &Catalog<'a>,
) -> Result<OptimizationResult<'a>, OptimizeError> {
    Optimizer::default().optimize(shopping_list, catalog)
}

fn validate_quantities(shopping_list: &[RequestedItem<'_>]) -> Result<(), OptimizeError> {
    shopping_list
        .iter()
        .enumerate()
        .try_for_each(|(index, item)| {
            if item.quantity() == 0 {
                Err(OptimizeError::InvalidQuantity {
                    index,
                    product_name: item.product_name().to_string(),
                })
            } else {
                Ok(())
            }
        })
}
