//! Utils

use clap::Parser;

use crate::config::NameMatching;

/// Arguments for the optimiser demo
#[derive(Debug, Parser)]
pub struct ExampleArgs {
    /// Fixture set to load the catalog & shopping list from
    #[clap(short, long, default_value = "groceries")]
    pub fixture: String,

    /// Override the fixture's product name matching
    #[clap(short, long, value_enum)]
    pub matching: Option<NameMatching>,

    /// Log filter used when `RUST_LOG` is unset
    #[clap(short, long, default_value = "info")]
    pub log_level: String,
}

impl ExampleArgs {
    /// Name matching to use, falling back to the one the fixture set configures.
    pub fn name_matching(&self, fixture_matching: NameMatching) -> NameMatching {
        self.matching.unwrap_or(fixture_matching)
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn args_use_defaults() -> TestResult {
        let args = ExampleArgs::try_parse_from(["optimise"])?;

        assert_eq!(args.fixture, "groceries");
        assert_eq!(args.log_level, "info");
        assert_eq!(
            args.name_matching(NameMatching::CaseInsensitive),
            NameMatching::CaseInsensitive
        );

        Ok(())
    }

    #[test]
    fn matching_flag_overrides_fixture() -> TestResult {
        let args =
            ExampleArgs::try_parse_from(["optimise", "-f", "ties", "-m", "case-insensitive"])?;

        assert_eq!(args.fixture, "ties");
        assert_eq!(
            args.name_matching(NameMatching::Exact),
            NameMatching::CaseInsensitive
        );

        Ok(())
    }
}
