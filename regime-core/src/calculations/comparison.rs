//! Side-by-side regime comparison.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use regime_core::{FinancialProfile, Locality, Regime, compare};
//!
//! let profile = FinancialProfile {
//!     gross_annual_income: dec!(1200000),
//!     house_rent_allowance_received: dec!(200000),
//!     annual_rent_paid: dec!(180000),
//!     section_80c_investment: dec!(100000),
//!     section_80d_premium: dec!(15000),
//!     locality: Locality::Metro,
//!     ..Default::default()
//! };
//!
//! let comparison = compare(&profile).unwrap();
//!
//! assert_eq!(comparison.old_regime.total_tax, dec!(130000));
//! assert_eq!(comparison.new_regime.total_tax, dec!(124800));
//! assert_eq!(comparison.recommended_regime, Regime::New);
//! assert_eq!(comparison.absolute_savings, dec!(5200));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::recommendations::recommend;
use crate::calculations::regimes::evaluator;
use crate::{FinancialProfile, Regime, TaxCalculationResult, TaxComparison, ValidationError};

/// Evaluates both regimes on `profile` and recommends the cheaper one.
///
/// # Errors
///
/// Returns [`ValidationError::NegativeAmount`] if any profile amount is
/// negative.
pub fn compare(profile: &FinancialProfile) -> Result<TaxComparison, ValidationError> {
    profile.validate()?;
    Ok(compare_validated(profile))
}

pub(crate) fn compare_validated(profile: &FinancialProfile) -> TaxComparison {
    let old_regime = evaluator(Regime::Old).evaluate(profile);
    let new_regime = evaluator(Regime::New).evaluate(profile);

    let absolute_savings = absolute_savings(&old_regime, &new_regime);
    let recommended_regime = recommended_regime(&old_regime, &new_regime);
    let recommendations = recommend(profile, &old_regime, &new_regime);

    debug!(
        recommended = recommended_regime.as_str(),
        savings = %absolute_savings,
        recommendations = recommendations.len(),
        "regimes compared"
    );

    TaxComparison {
        old_regime,
        new_regime,
        absolute_savings,
        recommended_regime,
        recommendations,
    }
}

fn absolute_savings(
    old_regime: &TaxCalculationResult,
    new_regime: &TaxCalculationResult,
) -> Decimal {
    (old_regime.total_tax - new_regime.total_tax).abs()
}

/// The old regime is kept when both owe the same.
fn recommended_regime(
    old_regime: &TaxCalculationResult,
    new_regime: &TaxCalculationResult,
) -> Regime {
    if old_regime.total_tax <= new_regime.total_tax {
        Regime::Old
    } else {
        Regime::New
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    // =========================================================================
    // recommended_regime tests
    // =========================================================================

    #[test]
    fn new_regime_recommended_when_cheaper() {
        let comparison = compare(&FinancialProfile::with_income(dec!(600000))).unwrap();

        assert_eq!(comparison.old_regime.total_tax, dec!(33800));
        assert_eq!(comparison.new_regime.total_tax, Decimal::ZERO);
        assert_eq!(comparison.recommended_regime, Regime::New);
        assert_eq!(comparison.absolute_savings, dec!(33800));
    }

    #[test]
    fn old_regime_recommended_when_cheaper() {
        let profile = FinancialProfile {
            section_80c_investment: dec!(150000),
            section_80d_premium: dec!(25000),
            nps_contribution: dec!(50000),
            home_loan_interest_paid: dec!(200000),
            ..FinancialProfile::with_income(dec!(1200000))
        };

        let comparison = compare(&profile).unwrap();

        assert!(comparison.old_regime.total_tax < comparison.new_regime.total_tax);
        assert_eq!(comparison.recommended_regime, Regime::Old);
    }

    #[test]
    fn tie_goes_to_old_regime() {
        // Both regimes owe nothing after rebate.
        let comparison = compare(&FinancialProfile::with_income(dec!(400000))).unwrap();

        assert_eq!(comparison.old_regime.total_tax, Decimal::ZERO);
        assert_eq!(comparison.new_regime.total_tax, Decimal::ZERO);
        assert_eq!(comparison.recommended_regime, Regime::Old);
        assert_eq!(comparison.absolute_savings, Decimal::ZERO);
    }

    #[test]
    fn zero_income_profile_compares_cleanly() {
        let comparison = compare(&FinancialProfile::default()).unwrap();

        assert_eq!(comparison.recommended_regime, Regime::Old);
        assert_eq!(comparison.old_regime.effective_rate_percent, Decimal::ZERO);
        assert_eq!(comparison.new_regime.effective_rate_percent, Decimal::ZERO);
    }

    // =========================================================================
    // accessor tests
    // =========================================================================

    #[test]
    fn recommended_returns_cheaper_result() {
        let comparison = compare(&FinancialProfile::with_income(dec!(600000))).unwrap();

        assert_eq!(comparison.recommended().regime, Regime::New);
        assert_eq!(comparison.result_for(Regime::Old).regime, Regime::Old);
    }

    // =========================================================================
    // validation tests
    // =========================================================================

    #[test]
    fn compare_rejects_negative_amounts() {
        let profile = FinancialProfile {
            annual_rent_paid: dec!(-1000),
            ..FinancialProfile::with_income(dec!(900000))
        };

        assert_eq!(
            compare(&profile),
            Err(ValidationError::NegativeAmount {
                field: "annual_rent_paid",
                value: dec!(-1000),
            })
        );
    }

    #[test]
    fn compare_rejects_oversized_income() {
        let profile = FinancialProfile::with_income(dec!(10000000000000000000000000000));

        assert!(matches!(
            compare(&profile),
            Err(ValidationError::AmountTooLarge { field: "gross_annual_income", .. })
        ));
    }

    #[test]
    fn compare_at_maximum_income_evaluates() {
        let comparison = compare(&FinancialProfile::with_income(crate::MAX_AMOUNT)).unwrap();

        assert!(comparison.old_regime.total_tax > Decimal::ZERO);
        assert_eq!(comparison.recommended_regime, Regime::New);
    }

    #[test]
    fn compare_attaches_recommendations() {
        let comparison = compare(&FinancialProfile::with_income(dec!(900000))).unwrap();

        let ids: Vec<&str> = comparison.recommendations.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["r1", "r3", "r2"]);
    }
}
