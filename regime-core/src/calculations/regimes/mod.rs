//! Regime evaluators.
//!
//! Each regime decides its own deductions and then shares one settlement
//! path:
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total deductions (regime specific) |
//! | 2    | Taxable income: gross income - deductions, minimum 0 |
//! | 3    | Slab tax on taxable income |
//! | 4    | Rebate when taxable income is at or below the threshold, capped at the tax owed |
//! | 5    | Cess: 4% of the tax after rebate |
//! | 6    | Total tax: tax after rebate + cess |
//!
//! Dispatch on a [`Regime`] goes through [`evaluator`], so adding a regime
//! is a compile error until every match handles it.

mod new_regime;
mod old_regime;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::slab::compute_slab_tax;
use crate::{FinancialProfile, Regime, TaxBracket, TaxCalculationResult};

pub use new_regime::{NEW_REGIME_BRACKETS, NEW_REGIME_REBATE, NewRegime, STANDARD_DEDUCTION};
pub use old_regime::{
    DeductionBreakdown, HOME_LOAN_INTEREST_CAP, NPS_CAP, OLD_REGIME_BRACKETS, OLD_REGIME_REBATE,
    OldRegime, SECTION_80C_CAP, SECTION_80D_CAP,
};

/// Health and education cess, applied to tax after rebate under both regimes.
pub const CESS_RATE: Decimal = dec!(0.04);

/// Computes a full [`TaxCalculationResult`] for one regime.
pub trait RegimeEvaluator: Send + Sync {
    fn regime(&self) -> Regime;

    fn evaluate(
        &self,
        profile: &FinancialProfile,
    ) -> TaxCalculationResult;
}

/// Evaluator for `regime`.
pub fn evaluator(regime: Regime) -> &'static dyn RegimeEvaluator {
    match regime {
        Regime::Old => &OldRegime,
        Regime::New => &NewRegime,
    }
}

/// Tax forgiveness for incomes at or below a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rebate {
    /// Highest taxable income that still qualifies.
    pub income_threshold: Decimal,
    pub max_rebate: Decimal,
}

impl Rebate {
    /// Rebate granted on `tax` for a given `taxable_income`; never more than
    /// the tax itself.
    pub fn amount(
        &self,
        taxable_income: Decimal,
        tax: Decimal,
    ) -> Decimal {
        if taxable_income <= self.income_threshold {
            tax.min(self.max_rebate)
        } else {
            Decimal::ZERO
        }
    }
}

/// Steps 2 through 6, shared by every regime.
pub(crate) fn settle(
    regime: Regime,
    gross_income: Decimal,
    total_deductions: Decimal,
    brackets: &[TaxBracket],
    rebate: Rebate,
) -> TaxCalculationResult {
    let taxable_income = max(gross_income - total_deductions, Decimal::ZERO);
    let tax_before_rebate = compute_slab_tax(taxable_income, brackets);
    let rebate = rebate.amount(taxable_income, tax_before_rebate);
    let tax_payable = tax_before_rebate - rebate;
    let cess = tax_payable * CESS_RATE;
    let total_tax = tax_payable + cess;
    let effective_rate_percent = if gross_income > Decimal::ZERO {
        total_tax / gross_income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    debug!(
        regime = regime.as_str(),
        taxable_income = %taxable_income,
        rebate = %rebate,
        total_tax = %total_tax,
        "regime evaluated"
    );

    TaxCalculationResult {
        regime,
        gross_income,
        total_deductions,
        taxable_income,
        tax_before_rebate,
        rebate,
        tax_payable,
        cess,
        total_tax,
        effective_rate_percent,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const REBATE: Rebate = Rebate {
        income_threshold: dec!(500000),
        max_rebate: dec!(12500),
    };

    // =========================================================================
    // Rebate tests
    // =========================================================================

    #[test]
    fn rebate_caps_at_tax_owed() {
        assert_eq!(REBATE.amount(dec!(400000), dec!(7500)), dec!(7500));
    }

    #[test]
    fn rebate_caps_at_maximum() {
        assert_eq!(REBATE.amount(dec!(500000), dec!(20000)), dec!(12500));
    }

    #[test]
    fn rebate_applies_at_threshold() {
        assert_eq!(REBATE.amount(dec!(500000), dec!(12500)), dec!(12500));
    }

    #[test]
    fn rebate_not_applied_above_threshold() {
        assert_eq!(REBATE.amount(dec!(500000.01), dec!(12500)), Decimal::ZERO);
    }

    #[test]
    fn rebate_of_zero_tax_is_zero() {
        assert_eq!(REBATE.amount(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
    }

    // =========================================================================
    // settle tests
    // =========================================================================

    #[test]
    fn settle_clamps_taxable_income_at_zero() {
        let result = settle(Regime::Old, dec!(100000), dec!(250000), &OLD_REGIME_BRACKETS, REBATE);

        assert_eq!(result.taxable_income, Decimal::ZERO);
        assert_eq!(result.total_tax, Decimal::ZERO);
    }

    #[test]
    fn settle_zero_income_has_zero_effective_rate() {
        let result = settle(Regime::New, Decimal::ZERO, dec!(50000), &NEW_REGIME_BRACKETS, NEW_REGIME_REBATE);

        assert_eq!(result.effective_rate_percent, Decimal::ZERO);
    }

    #[test]
    fn settle_applies_cess_after_rebate() {
        let result = settle(Regime::Old, dec!(1000000), Decimal::ZERO, &OLD_REGIME_BRACKETS, REBATE);

        // 12500 + 100000
        assert_eq!(result.tax_before_rebate, dec!(112500));
        assert_eq!(result.rebate, Decimal::ZERO);
        assert_eq!(result.cess, dec!(4500));
        assert_eq!(result.total_tax, dec!(117000));
        assert_eq!(result.effective_rate_percent, dec!(11.7));
    }

    #[test]
    fn settle_total_is_tax_payable_plus_cess() {
        let result = settle(Regime::New, dec!(1733333), dec!(50000), &NEW_REGIME_BRACKETS, NEW_REGIME_REBATE);

        assert_eq!(result.total_tax, result.tax_payable + result.cess);
    }

    // =========================================================================
    // evaluator lookup tests
    // =========================================================================

    #[test]
    fn evaluator_lookup_returns_matching_regime() {
        for regime in Regime::ALL {
            assert_eq!(evaluator(regime).regime(), regime);
        }
    }

    #[test]
    fn evaluator_lookup_result_is_tagged_with_regime() {
        let profile = FinancialProfile::with_income(dec!(750000));

        for regime in Regime::ALL {
            assert_eq!(evaluator(regime).evaluate(&profile).regime, regime);
        }
    }
}
