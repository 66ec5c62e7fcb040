//! Purchasing strategies
//!
//! Both strategies work on the lines left after feasibility partitioning and price them
//! from the catalog index. They never see unavailable lines.

pub mod multi_vendor;
pub mod single_vendor;

pub use multi_vendor::{cheapest_lines, multi_vendor_bundles};
pub use single_vendor::{best_single_vendor, single_vendor_options};
