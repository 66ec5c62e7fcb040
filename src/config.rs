//! Optimizer Config

use std::borrow::Cow;

use serde::Deserialize;

/// How product names in the shopping list are matched against catalog listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum NameMatching {
    /// Names must be identical, byte for byte.
    #[default]
    Exact,

    /// Names are trimmed and lowercased before comparison.
    CaseInsensitive,
}

impl NameMatching {
    /// Returns the grouping key for a product name.
    pub fn key<'n>(&self, name: &'n str) -> Cow<'n, str> {
        match self {
            NameMatching::Exact => Cow::Borrowed(name),
            NameMatching::CaseInsensitive => Cow::Owned(name.trim().to_lowercase()),
        }
    }
}

/// Optimizer settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Product name matching policy, applied to catalog grouping and list lookups alike.
    pub name_matching: NameMatching,
}

impl OptimizerConfig {
    /// Parses optimizer settings from YAML. Missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_norway::Error`] if the YAML cannot be parsed.
    pub fn from_yaml(contents: &str) -> Result<Self, serde_norway::Error> {
        serde_norway::from_str(contents)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn exact_key_is_the_name() {
        assert_eq!(NameMatching::Exact.key(" Milk "), " Milk ");
    }

    #[test]
    fn case_insensitive_key_is_trimmed_and_lowercased() {
        assert_eq!(NameMatching::CaseInsensitive.key(" Whole MILK "), "whole milk");
    }

    #[test]
    fn default_config_matches_exactly() {
        assert_eq!(OptimizerConfig::default().name_matching, NameMatching::Exact);
    }

    #[test]
    fn from_yaml_reads_name_matching() -> TestResult {
        let config = OptimizerConfig::from_yaml("name_matching: case_insensitive\n")?;

        assert_eq!(config.name_matching, NameMatching::CaseInsensitive);

        Ok(())
    }

    #[test]
    fn from_yaml_defaults_missing_keys() -> TestResult {
        let config = OptimizerConfig::from_yaml("{}")?;

        assert_eq!(config, OptimizerConfig::default());

        Ok(())
    }

    #[test]
    fn from_yaml_rejects_unknown_policy() {
        assert!(OptimizerConfig::from_yaml("name_matching: fuzzy\n").is_err());
    }
}
