//! Number formatting used by labels.
//!
//! The compact AUM format differs between locales (万 in Chinese, millions in
//! English), so two renderings of the same portfolio are not directly
//! comparable.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::Locale;
use crate::constants::DISPLAY_DECIMAL_PRECISION;

const CURRENCY_SYMBOL: &str = "¥";

fn group_thousands(integer_digits: &str) -> String {
    let mut grouped = String::with_capacity(integer_digits.len() + integer_digits.len() / 3);
    for (i, ch) in integer_digits.chars().enumerate() {
        if i > 0 && (integer_digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats an amount as `¥1,250,000` (up to two decimals, trailing zeros dropped).
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(DISPLAY_DECIMAL_PRECISION, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = rounded.abs().to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (text, None),
    };
    match fraction {
        Some(f) => format!("{}{}{}.{}", sign, CURRENCY_SYMBOL, group_thousands(&integer), f),
        None => format!("{}{}{}", sign, CURRENCY_SYMBOL, group_thousands(&integer)),
    }
}

/// Formats an AUM figure in the scale each locale uses on portfolio cards.
pub fn format_compact_aum(aum: Decimal, locale: Locale) -> String {
    match locale {
        Locale::Zh => {
            let wan = (aum / dec!(10000)).round_dp(0);
            format!("{}{}万", CURRENCY_SYMBOL, wan)
        }
        Locale::En => {
            let millions = (aum / dec!(1000000)).round_dp(1);
            format!("{}{:.1}M", CURRENCY_SYMBOL, millions)
        }
    }
}

/// Formats a percentage with an explicit sign: `+5.0%`, `-1.25%`, `0.0%`.
pub fn format_signed_percent(value: Decimal, dp: u32) -> String {
    let rounded = value.round_dp(dp);
    let sign = if rounded > Decimal::ZERO { "+" } else { "" };
    format!("{}{:.*}%", sign, dp as usize, rounded)
}
