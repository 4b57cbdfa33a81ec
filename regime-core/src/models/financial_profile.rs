use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::models::Locality;

/// An individual's financial figures for one assessment year.
///
/// Amounts are annual rupee values as declared; statutory caps are applied
/// by the regime evaluators, never to the profile itself.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinancialProfile {
    pub gross_annual_income: Decimal,
    pub house_rent_allowance_received: Decimal,
    pub annual_rent_paid: Decimal,
    pub home_loan_interest_paid: Decimal,
    pub section_80c_investment: Decimal,
    pub section_80d_premium: Decimal,
    pub nps_contribution: Decimal,
    pub other_deductions: Decimal,
    pub locality: Locality,
}

impl FinancialProfile {
    /// Profile with only a gross income and every deduction left at zero.
    pub fn with_income(gross_annual_income: Decimal) -> Self {
        Self {
            gross_annual_income,
            ..Default::default()
        }
    }

    /// Rejects any monetary field that is negative or above
    /// [`MAX_AMOUNT`](crate::MAX_AMOUNT).
    ///
    /// Fields are checked in declaration order and the first offender is
    /// reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.amounts()
            .into_iter()
            .try_for_each(|(field, value)| ValidationError::ensure_amount(field, value))
    }

    fn amounts(&self) -> [(&'static str, Decimal); 8] {
        [
            ("gross_annual_income", self.gross_annual_income),
            ("house_rent_allowance_received", self.house_rent_allowance_received),
            ("annual_rent_paid", self.annual_rent_paid),
            ("home_loan_interest_paid", self.home_loan_interest_paid),
            ("section_80c_investment", self.section_80c_investment),
            ("section_80d_premium", self.section_80d_premium),
            ("nps_contribution", self.nps_contribution),
            ("other_deductions", self.other_deductions),
        ]
    }
}
