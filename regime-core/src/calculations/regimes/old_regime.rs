//! Old (deduction-rich) regime.
//!
//! | Deduction | Cap |
//! |-----------|-----|
//! | Section 80C investments | 150,000 |
//! | Section 80D health insurance premium | 25,000 |
//! | NPS, Section 80CCD(1B) | 50,000 |
//! | Home-loan interest, Section 24(b) | 200,000 |
//! | Other deductions | none |
//! | HRA exemption | see [`compute_housing_exemption`] |
//!
//! Each cap is applied independently; anything above a cap is discarded.
//! Taxable income up to 500,000 earns a rebate of up to 12,500.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{Rebate, RegimeEvaluator, settle};
use crate::calculations::exemption::compute_housing_exemption;
use crate::{FinancialProfile, Regime, TaxBracket, TaxCalculationResult};

pub const OLD_REGIME_BRACKETS: [TaxBracket; 4] = [
    TaxBracket::new(dec!(0), Some(dec!(250000)), dec!(0)),
    TaxBracket::new(dec!(250000), Some(dec!(500000)), dec!(5)),
    TaxBracket::new(dec!(500000), Some(dec!(1000000)), dec!(20)),
    TaxBracket::new(dec!(1000000), None, dec!(30)),
];

pub const OLD_REGIME_REBATE: Rebate = Rebate {
    income_threshold: dec!(500000),
    max_rebate: dec!(12500),
};

pub const SECTION_80C_CAP: Decimal = dec!(150000);
pub const SECTION_80D_CAP: Decimal = dec!(25000);
pub const NPS_CAP: Decimal = dec!(50000);
pub const HOME_LOAN_INTEREST_CAP: Decimal = dec!(200000);

/// Each deduction claimed under the old regime, after its cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub section_80c: Decimal,
    pub section_80d: Decimal,
    pub nps: Decimal,
    pub home_loan_interest: Decimal,
    pub other: Decimal,
    pub housing_exemption: Decimal,
}

impl DeductionBreakdown {
    pub fn total(&self) -> Decimal {
        self.section_80c
            + self.section_80d
            + self.nps
            + self.home_loan_interest
            + self.other
            + self.housing_exemption
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct OldRegime;

impl OldRegime {
    /// Capped deductions for `profile`.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use regime_core::FinancialProfile;
    /// use regime_core::calculations::OldRegime;
    ///
    /// let profile = FinancialProfile {
    ///     section_80c_investment: dec!(200000),
    ///     section_80d_premium: dec!(15000),
    ///     ..FinancialProfile::with_income(dec!(900000))
    /// };
    ///
    /// let breakdown = OldRegime.deductions(&profile);
    ///
    /// assert_eq!(breakdown.section_80c, dec!(150000));
    /// assert_eq!(breakdown.total(), dec!(165000));
    /// ```
    pub fn deductions(
        &self,
        profile: &FinancialProfile,
    ) -> DeductionBreakdown {
        DeductionBreakdown {
            section_80c: profile.section_80c_investment.min(SECTION_80C_CAP),
            section_80d: profile.section_80d_premium.min(SECTION_80D_CAP),
            nps: profile.nps_contribution.min(NPS_CAP),
            home_loan_interest: profile.home_loan_interest_paid.min(HOME_LOAN_INTEREST_CAP),
            other: profile.other_deductions,
            housing_exemption: compute_housing_exemption(
                profile.gross_annual_income,
                profile.house_rent_allowance_received,
                profile.annual_rent_paid,
                profile.locality,
            ),
        }
    }
}

impl RegimeEvaluator for OldRegime {
    fn regime(&self) -> Regime {
        Regime::Old
    }

    fn evaluate(
        &self,
        profile: &FinancialProfile,
    ) -> TaxCalculationResult {
        let deductions = self.deductions(profile);

        settle(
            Regime::Old,
            profile.gross_annual_income,
            deductions.total(),
            &OLD_REGIME_BRACKETS,
            OLD_REGIME_REBATE,
        )
    }
}
