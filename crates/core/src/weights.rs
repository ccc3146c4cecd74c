//! Fund-weight arithmetic shared by the wizard, the rebalance editor and the
//! strategy template form.
//!
//! Every editable weight vector in the workbench is subject to the same
//! invariant: it may only be published or applied when its total is within
//! [`WEIGHT_TOLERANCE`] of 100.

use std::str::FromStr;

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{WEIGHT_PRECISION, WEIGHT_TOLERANCE, WEIGHT_TOTAL};

/// Sums a sequence of weights.
pub fn total_weight<'a, I>(weights: I) -> Decimal
where
    I: IntoIterator<Item = &'a Decimal>,
{
    weights.into_iter().copied().sum()
}

/// Returns true when `total` is close enough to 100 to be committed.
pub fn is_balanced(total: Decimal) -> bool {
    (total - WEIGHT_TOTAL).abs() < WEIGHT_TOLERANCE
}

/// Clamps a weight into `[0, 100]`.
pub fn clamp_weight(weight: Decimal) -> Decimal {
    weight.clamp(Decimal::ZERO, WEIGHT_TOTAL)
}

/// Parses a raw numeric field the way the weight inputs do.
///
/// Blank and non-numeric input count as 0; out-of-range values are clamped
/// silently.
pub fn parse_weight_input(raw: &str) -> Decimal {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .map(clamp_weight)
        .unwrap_or(Decimal::ZERO)
}

/// Rescales weights proportionally so they sum to exactly 100.
///
/// Values are kept at two decimal places; the rounding residue is handed out
/// one hundredth at a time to the entries with the largest truncated
/// remainder. Negative inputs are treated as 0 and an all-zero vector is
/// split evenly.
pub fn normalize_to_hundred(weights: &[Decimal]) -> Vec<Decimal> {
    if weights.is_empty() {
        return Vec::new();
    }

    let cleaned: Vec<Decimal> = weights.iter().map(|w| (*w).max(Decimal::ZERO)).collect();
    let sum = total_weight(&cleaned);

    let scaled: Vec<Decimal> = if sum.is_zero() {
        let share = WEIGHT_TOTAL / Decimal::from(cleaned.len());
        vec![share; cleaned.len()]
    } else {
        cleaned.iter().map(|w| *w * WEIGHT_TOTAL / sum).collect()
    };

    let mut result: Vec<Decimal> = scaled
        .iter()
        .map(|w| w.round_dp_with_strategy(WEIGHT_PRECISION, RoundingStrategy::ToZero))
        .collect();

    let step = Decimal::new(1, WEIGHT_PRECISION);
    let residue = WEIGHT_TOTAL - total_weight(&result);
    let units = (residue / step).round().to_i64().unwrap_or(0).max(0) as usize;

    let mut order: Vec<usize> = (0..result.len()).collect();
    order.sort_by(|&a, &b| {
        let rem_a = scaled[a] - result[a];
        let rem_b = scaled[b] - result[b];
        rem_b.cmp(&rem_a).then(a.cmp(&b))
    });

    for idx in order.into_iter().cycle().take(units) {
        result[idx] += step;
    }

    result
}
