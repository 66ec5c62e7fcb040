//! Cartwise prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    bundles::{OptimizedLine, VendorBundle},
    catalog::{Catalog, CatalogError},
    config::{NameMatching, OptimizerConfig},
    items::RequestedItem,
    listings::Listing,
    optimizer::{OptimizeError, Optimizer, optimize},
    pricing::PricingError,
    report::{Report, ReportError},
    result::{Coverage, OptimizationResult},
};
