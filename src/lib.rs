//! Cartwise
//!
//! Cartwise is a shopping list price optimizer. Given a catalog of vendor listings it
//! finds the cheapest single vendor able to supply a whole list, the cheapest way to
//! split the list across vendors, and how much splitting saves.

pub mod bundles;
pub mod catalog;
pub mod config;
pub mod feasibility;
pub mod fixtures;
pub mod index;
pub mod items;
pub mod listings;
pub mod optimizer;
pub mod prelude;
pub mod pricing;
pub mod report;
pub mod result;
pub mod strategies;
pub mod utils;
