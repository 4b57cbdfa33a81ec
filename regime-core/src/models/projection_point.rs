use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::round_to_rupee;

/// One sample of a what-if income sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Gross income of the sample, in lakh (100,000) rupees.
    pub income_in_lakhs: Decimal,
    pub old_regime_tax: Decimal,
    pub new_regime_tax: Decimal,
}

impl ProjectionPoint {
    /// Same point with both taxes rounded to whole rupees, for charting.
    pub fn rounded(&self) -> Self {
        Self {
            income_in_lakhs: self.income_in_lakhs,
            old_regime_tax: round_to_rupee(self.old_regime_tax),
            new_regime_tax: round_to_rupee(self.new_regime_tax),
        }
    }
}
