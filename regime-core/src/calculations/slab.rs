//! Progressive slab taxation.

use rust_decimal::Decimal;

use crate::TaxBracket;

/// Tax owed on `taxable_income` under a progressive schedule.
///
/// Brackets must be ascending and non-overlapping; every bracket the income
/// reaches contributes `amount_within × rate_percent / 100`. Zero or negative
/// income yields zero.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::calculations::compute_slab_tax;
/// use regime_core::calculations::regimes::OLD_REGIME_BRACKETS;
///
/// // 5% of 2.5 lakh, 20% of 5 lakh, 30% of 25,000
/// assert_eq!(compute_slab_tax(dec!(1025000), &OLD_REGIME_BRACKETS), dec!(125000));
/// ```
pub fn compute_slab_tax(
    taxable_income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    brackets
        .iter()
        .filter(|bracket| taxable_income > bracket.lower_bound)
        .map(|bracket| bracket.amount_within(taxable_income) * bracket.rate_percent / Decimal::ONE_HUNDRED)
        .sum()
}
