//! Fixtures
//!
//! YAML fixture sets for demos and tests. A set `name` is made of
//! `catalogs/{name}.yml`, `lists/{name}.yml` and, optionally, `config/{name}.yml`
//! under the base path.

use std::{fs, path::PathBuf};

use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    config::OptimizerConfig,
    fixtures::{catalogs::CatalogFixture, lists::ListFixture},
    items::RequestedItem,
    listings::Listing,
};

pub mod catalogs;
pub mod lists;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Currency mismatch between prices
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// Nothing loaded yet
    #[error("No prices loaded yet; currency unknown")]
    NoCurrency,

    /// Catalog creation error
    #[error("Failed to create catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Fixture
#[derive(Debug)]
pub struct Fixture<'a> {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Catalog listings in file order
    listings: Vec<Listing<'a>>,

    /// Shopping list lines in file order
    items: Vec<RequestedItem<'a>>,

    /// Optimizer settings for the set
    config: OptimizerConfig,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl<'a> Fixture<'a> {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            listings: Vec::new(),
            items: Vec::new(),
            config: OptimizerConfig::default(),
            currency: None,
        }
    }

    /// Load catalog listings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        for listing_fixture in fixture.listings {
            // Parse to get currency first (before creating Listing)
            let (_minor_units, currency) = catalogs::parse_price(&listing_fixture.price)?;

            self.check_currency(currency)?;
            self.listings.push(listing_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load shopping list lines from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_list(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("lists").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ListFixture = serde_norway::from_str(&contents)?;

        for item_fixture in fixture.items {
            let (_minor_units, currency) = catalogs::parse_price(&item_fixture.price_per_unit)?;

            self.check_currency(currency)?;
            self.items.push(item_fixture.try_into()?);
        }

        Ok(self)
    }

    /// Load optimizer settings from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_config(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("config").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;

        self.config = OptimizerConfig::from_yaml(&contents)?;

        Ok(self)
    }

    /// Load a complete fixture set (catalog, list and, if present, config with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        Self::from_set_in("./fixtures", name)
    }

    /// Load a complete fixture set from a custom base path
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set_in(base_path: impl Into<PathBuf>, name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::with_base_path(base_path);

        fixture.load_catalog(name)?.load_list(name)?;

        if fixture
            .base_path
            .join("config")
            .join(format!("{name}.yml"))
            .is_file()
        {
            fixture.load_config(name)?;
        }

        Ok(fixture)
    }

    /// Build a catalog from the loaded listings
    ///
    /// # Errors
    ///
    /// Returns an error if nothing with a price was loaded, or if a listing is invalid.
    pub fn catalog(&self) -> Result<Catalog<'a>, FixtureError> {
        let currency = self.currency()?;

        Ok(Catalog::with_listings(self.listings.clone(), currency)?)
    }

    /// Get the loaded shopping list
    pub fn shopping_list(&self) -> &[RequestedItem<'a>] {
        &self.items
    }

    /// Get the loaded optimizer settings
    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    /// Get the currency
    ///
    /// # Errors
    ///
    /// Returns an error if nothing with a price has been loaded yet.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    fn check_currency(&mut self, currency: &'static Currency) -> Result<(), FixtureError> {
        match self.currency {
            Some(existing) if existing != currency => Err(FixtureError::CurrencyMismatch(
                existing.iso_alpha_code.to_string(),
                currency.iso_alpha_code.to_string(),
            )),
            Some(_) => Ok(()),
            None => {
                self.currency = Some(currency);

                Ok(())
            }
        }
    }
}

impl Default for Fixture<'_> {
    fn default() -> Self {
        Self::new()
    }
}
