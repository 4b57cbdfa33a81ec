//! Common utility functions for tax calculations.
//!
//! Core computations never round; these helpers exist for presentation
//! values and for building human-readable descriptions.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to whole rupees, half away from zero.
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(-200.00)), dec!(-100.00));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Formats a rupee amount with Indian digit grouping.
///
/// The last three integer digits form one group and every two digits above
/// that form another, so one and a half lakh prints as `₹1,50,000`.
/// Fractions are rounded half-up to two places and trailing zeros dropped.
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::common::format_inr;
///
/// assert_eq!(format_inr(dec!(150000)), "₹1,50,000");
/// assert_eq!(format_inr(dec!(12345678.5)), "₹1,23,45,678.5");
/// ```
pub fn format_inr(amount: Decimal) -> String {
    let rounded = round_half_up(amount).normalize();
    let negative = rounded < Decimal::ZERO;
    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut grouped = group_indian(int_part);
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }

    if negative {
        format!("-₹{grouped}")
    } else {
        format!("₹{grouped}")
    }
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
