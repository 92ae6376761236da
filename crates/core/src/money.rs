//! Money
//!
//! Prices are held as [`Decimal`]s and converted to Turkish lira
//! [`Money`] for display.

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{Currency, TRY},
};

/// The storefront's trading currency.
pub fn currency() -> &'static Currency {
    TRY
}

/// Convert a decimal amount into lira, rounded to the nearest kuruş.
///
/// Returns `None` if the amount doesn't fit in minor units.
pub fn to_money(amount: Decimal) -> Option<Money<'static, Currency>> {
    let minor_units = amount
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp(0)
        .to_i64()?;

    Some(Money::from_minor(minor_units, currency()))
}

/// Format a decimal amount for display.
pub fn format_price(amount: Decimal) -> String {
    to_money(amount).map_or_else(|| format!("{amount:.2}"), |money| money.to_string())
}
