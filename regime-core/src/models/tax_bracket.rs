use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One slab of a progressive schedule.
///
/// `upper_bound` of `None` means the slab is open-ended. Rates are whole
/// percentages (`dec!(5)` is 5%).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
}

impl TaxBracket {
    pub const fn new(
        lower_bound: Decimal,
        upper_bound: Option<Decimal>,
        rate_percent: Decimal,
    ) -> Self {
        Self {
            lower_bound,
            upper_bound,
            rate_percent,
        }
    }

    /// Portion of `income` that falls inside this slab.
    pub fn amount_within(
        &self,
        income: Decimal,
    ) -> Decimal {
        if income <= self.lower_bound {
            return Decimal::ZERO;
        }
        let top = match self.upper_bound {
            Some(upper) => income.min(upper),
            None => income,
        };
        top - self.lower_bound
    }
}
