//! Shopping List Optimiser Example
//!
//! Compares buying a whole shopping list from one vendor against splitting it across
//! vendors.
//!
//! Use `-f` to load a fixture set by name
//! Use `-m` to override product name matching (`exact` or `case-insensitive`)
//! Use `-l` to set the log filter when `RUST_LOG` is unset

use std::{io, io::Write, time::Instant};

use anyhow::Result;
use clap::Parser;
use humanize_duration::{Truncate, prelude::DurationExt};
use tracing_subscriber::EnvFilter;

use cartwise::{
    config::OptimizerConfig, fixtures::Fixture, optimizer::Optimizer, report::Report,
    utils::ExampleArgs,
};

/// Shopping List Optimiser Example
pub fn main() -> Result<()> {
    let args = ExampleArgs::parse();

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    let fixture = Fixture::from_set(&args.fixture)?;
    let catalog = fixture.catalog()?;

    let optimizer = Optimizer::new(OptimizerConfig {
        name_matching: args.name_matching(fixture.config().name_matching),
    });

    let start = Instant::now();

    let result = optimizer.optimize(fixture.shopping_list(), &catalog)?;

    let elapsed = start.elapsed();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Report::new(&result).write_to(&mut handle)?;

    writeln!(
        handle,
        " {} ({}s)",
        elapsed.human(Truncate::Nano),
        elapsed.as_secs_f32()
    )?;

    Ok(())
}
