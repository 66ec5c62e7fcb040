//! Report
//!
//! Console rendering of an [`OptimizationResult`].

use std::io;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{bundles::VendorBundle, result::OptimizationResult};

/// Errors that can occur when writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable comparison of both purchasing strategies.
#[derive(Debug)]
pub struct Report<'r, 'a> {
    result: &'r OptimizationResult<'a>,
}

impl<'r, 'a> Report<'r, 'a> {
    /// Create a report for an optimization result.
    pub fn new(result: &'r OptimizationResult<'a>) -> Self {
        Self { result }
    }

    /// Writes the report: the single-vendor option, the multi-vendor split, totals and
    /// the items nobody sells.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReportError> {
        writeln!(out, "\n Single vendor").map_err(|_err| ReportError::IO)?;

        match self.result.best_single_vendor() {
            Some(bundle) => write_bundles_table(&mut out, std::slice::from_ref(bundle))?,
            None if self.result.multi_vendor_bundles().is_empty() => {
                writeln!(out, " Nothing on the list is available.")
                    .map_err(|_err| ReportError::IO)?;
            }
            None => {
                writeln!(out, " No single vendor carries every available item.")
                    .map_err(|_err| ReportError::IO)?;
            }
        }

        if !self.result.multi_vendor_bundles().is_empty() {
            writeln!(out, "\n Multiple vendors").map_err(|_err| ReportError::IO)?;

            write_bundles_table(&mut out, self.result.multi_vendor_bundles())?;
        }

        write_summary(&mut out, self.result)?;

        write_unavailable(&mut out, self.result)
    }
}

fn write_bundles_table(
    out: &mut impl io::Write,
    bundles: &[VendorBundle<'_>],
) -> Result<(), ReportError> {
    let mut builder = Builder::default();
    let mut vendor_boundary_rows: SmallVec<[usize; 8]> = SmallVec::new();
    let mut current_row = 1; // header is row 0

    builder.push_record(["Vendor", "Item", "Qty", "Unit Price", "Total"]);

    for bundle in bundles {
        vendor_boundary_rows.push(current_row);

        for (idx, line) in bundle.items().iter().enumerate() {
            let vendor = if idx == 0 {
                bundle.vendor_name().to_string()
            } else {
                String::new()
            };

            builder.push_record([
                vendor,
                line.product_name().to_string(),
                line.quantity().to_string(),
                format!("{}", line.price_per_unit()),
                format!("{}", line.total_price()),
            ]);

            current_row += 1;
        }

        builder.push_record([
            String::new(),
            String::new(),
            bundle.item_count().to_string(),
            String::new(),
            format!("{}", bundle.total_cost()),
        ]);

        current_row += 1;
    }

    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    for &row in &vendor_boundary_rows {
        if row > 1 {
            theme.insert_horizontal_line(row, separator);
        }
    }

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(2..5), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReportError::IO)
}

fn write_summary(
    out: &mut impl io::Write,
    result: &OptimizationResult<'_>,
) -> Result<(), ReportError> {
    let savings_percent_points =
        percent_points_from_fractional_percentage(result.savings_percent());

    let single_label = " Single vendor:";
    let multi_label = " Multiple vendors:";
    let savings_label = " Savings:";

    let single_val = if result.best_single_vendor().is_some() {
        format!("{}  ", result.single_vendor_total())
    } else {
        "n/a  ".to_string()
    };
    let multi_val = format!("{}  ", result.multi_vendor_total());
    let savings_val = format!("({savings_percent_points:.2}%) {}  ", result.savings());

    let label_width = single_label
        .len()
        .max(multi_label.len())
        .max(savings_label.len());

    let value_width = single_val
        .chars()
        .count()
        .max(multi_val.chars().count())
        .max(savings_val.chars().count());

    writeln!(out).map_err(|_err| ReportError::IO)?;

    write_summary_line(out, single_label, &single_val, label_width, value_width)?;
    write_summary_line(out, multi_label, &multi_val, label_width, value_width)?;
    write_summary_line(out, savings_label, &savings_val, label_width, value_width)
}

fn write_unavailable(
    out: &mut impl io::Write,
    result: &OptimizationResult<'_>,
) -> Result<(), ReportError> {
    if result.unavailable_items().is_empty() {
        return writeln!(out).map_err(|_err| ReportError::IO);
    }

    let names: Vec<String> = result
        .unavailable_items()
        .iter()
        .map(|item| format!("{} (x{})", item.product_name(), item.quantity()))
        .collect();

    writeln!(out, "\n Unavailable: {}\n", names.join(", ")).map_err(|_err| ReportError::IO)
}

/// Converts a fractional percentage to percent points for display.
fn percent_points_from_fractional_percentage(percentage: Percentage) -> Decimal {
    // `Percentage` is a fraction (e.g. 0.25), so multiply by 100 to print percent points.
    ((percentage * Decimal::ONE) * Decimal::from_i64(100).unwrap_or(Decimal::ZERO)).round_dp(2)
}

/// Writes a summary line with a right-aligned label and a fixed-width value column.
fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: &str,
    label_col_width: usize,
    value_col_width: usize,
) -> Result<(), ReportError> {
    let label_pad = label_col_width.saturating_sub(label.len());
    let value_pad = value_col_width.saturating_sub(value.chars().count());

    writeln!(
        out,
        "{:>label_pad$}{label}  {value_pad}{value}",
        "",
        value_pad = " ".repeat(value_pad)
    )
    .map_err(|_err| ReportError::IO)
}
