use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::Regime;

/// Liability computed under a single regime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxCalculationResult {
    pub regime: Regime,
    pub gross_income: Decimal,

    /// Everything subtracted from gross income, after statutory caps.
    pub total_deductions: Decimal,

    /// `max(0, gross_income - total_deductions)`.
    pub taxable_income: Decimal,

    /// Slab tax before any rebate.
    pub tax_before_rebate: Decimal,

    /// Rebate granted; never more than `tax_before_rebate`.
    pub rebate: Decimal,

    /// Slab tax after rebate. This is the base for cess.
    pub tax_payable: Decimal,

    pub cess: Decimal,

    /// `tax_payable + cess`.
    pub total_tax: Decimal,

    /// `total_tax / gross_income * 100`, or zero for zero income.
    pub effective_rate_percent: Decimal,
}
