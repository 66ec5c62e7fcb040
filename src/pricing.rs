//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

/// Errors that can occur while calculating line and bundle totals.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A line total does not fit in minor units.
    #[error("line total overflows: {minor_units} x {quantity}")]
    Overflow {
        /// Unit price in minor units
        minor_units: i64,
        /// Requested quantity
        quantity: u32,
    },

    /// A running total does not fit in minor units.
    #[error("total overflows: {running} + {addend}")]
    TotalOverflow {
        /// Total so far in minor units
        running: i64,
        /// Amount being added in minor units
        addend: i64,
    },

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `price x quantity`.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in minor units.
pub fn line_total<'a>(
    price: &Money<'a, Currency>,
    quantity: u32,
) -> Result<Money<'a, Currency>, PricingError> {
    let minor_units = price.to_minor_units();

    let total = minor_units
        .checked_mul(i64::from(quantity))
        .ok_or(PricingError::Overflow {
            minor_units,
            quantity,
        })?;

    Ok(Money::from_minor(total, price.currency()))
}

/// Sums a sequence of amounts, starting from zero in the given currency.
///
/// # Errors
///
/// - [`PricingError::Money`]: an amount is in a different currency.
/// - [`PricingError::TotalOverflow`]: the total does not fit in minor units.
pub fn sum<'a>(
    amounts: impl IntoIterator<Item = Money<'a, Currency>>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    amounts
        .into_iter()
        .try_fold(Money::from_minor(0, currency), |acc, amount| {
            let running = acc.to_minor_units();
            let addend = amount.to_minor_units();
            let total = acc.add(amount)?;

            if running.checked_add(addend).is_none() {
                return Err(PricingError::TotalOverflow { running, addend });
            }

            Ok(total)
        })
}
