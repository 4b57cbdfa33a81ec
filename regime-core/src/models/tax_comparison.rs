use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Recommendation, Regime, TaxCalculationResult};

/// Both regimes evaluated on the same profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxComparison {
    pub old_regime: TaxCalculationResult,
    pub new_regime: TaxCalculationResult,

    /// `|old_regime.total_tax - new_regime.total_tax|`.
    pub absolute_savings: Decimal,

    /// Regime with the lower total tax; the old regime wins ties.
    pub recommended_regime: Regime,

    /// Sorted by `potential_savings`, largest first.
    pub recommendations: Vec<Recommendation>,
}

impl TaxComparison {
    pub fn result_for(
        &self,
        regime: Regime,
    ) -> &TaxCalculationResult {
        match regime {
            Regime::Old => &self.old_regime,
            Regime::New => &self.new_regime,
        }
    }

    pub fn recommended(&self) -> &TaxCalculationResult {
        self.result_for(self.recommended_regime)
    }
}
