//! New (deduction-light) regime.
//!
//! Only a flat standard deduction of 50,000 applies; HRA, 80C, 80D, NPS and
//! home-loan interest are ignored. Taxable income up to 700,000 earns a
//! rebate of up to 25,000.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{Rebate, RegimeEvaluator, settle};
use crate::{FinancialProfile, Regime, TaxBracket, TaxCalculationResult};

pub const NEW_REGIME_BRACKETS: [TaxBracket; 6] = [
    TaxBracket::new(dec!(0), Some(dec!(300000)), dec!(0)),
    TaxBracket::new(dec!(300000), Some(dec!(600000)), dec!(5)),
    TaxBracket::new(dec!(600000), Some(dec!(900000)), dec!(10)),
    TaxBracket::new(dec!(900000), Some(dec!(1200000)), dec!(15)),
    TaxBracket::new(dec!(1200000), Some(dec!(1500000)), dec!(20)),
    TaxBracket::new(dec!(1500000), None, dec!(30)),
];

pub const NEW_REGIME_REBATE: Rebate = Rebate {
    income_threshold: dec!(700000),
    max_rebate: dec!(25000),
};

pub const STANDARD_DEDUCTION: Decimal = dec!(50000);

#[derive(Debug, Clone, Copy, Default)]
pub struct NewRegime;

impl RegimeEvaluator for NewRegime {
    fn regime(&self) -> Regime {
        Regime::New
    }

    fn evaluate(
        &self,
        profile: &FinancialProfile,
    ) -> TaxCalculationResult {
        settle(
            Regime::New,
            profile.gross_annual_income,
            STANDARD_DEDUCTION,
            &NEW_REGIME_BRACKETS,
            NEW_REGIME_REBATE,
        )
    }
}
