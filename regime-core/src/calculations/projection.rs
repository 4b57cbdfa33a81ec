//! What-if projections.
//!
//! A what-if profile is always a new copy of the base profile with a higher
//! income and a topped-up Section 80C investment (never above its cap). The
//! base profile is never modified.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::calculations::regimes::{SECTION_80C_CAP, evaluator};
use crate::error::ValidationError;
use crate::{FinancialProfile, ProjectionPoint, Regime, TaxCalculationResult};

/// Rupees per lakh, the unit of [`ProjectionPoint::income_in_lakhs`].
pub const LAKH: Decimal = dec!(100000);

/// Sweep parameters for [`project`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionParams {
    pub income_step: Decimal,
    /// Largest income increase sampled, inclusive.
    pub max_income_delta: Decimal,
    pub additional_section_80c: Decimal,
}

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            income_step: dec!(100000),
            max_income_delta: dec!(500000),
            additional_section_80c: Decimal::ZERO,
        }
    }
}

impl ProjectionParams {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.income_step <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveStep(self.income_step));
        }
        ValidationError::ensure_amount("income_step", self.income_step)?;
        ValidationError::ensure_amount("max_income_delta", self.max_income_delta)?;
        ValidationError::ensure_amount("additional_section_80c", self.additional_section_80c)
    }
}

/// A single hypothetical change to the base profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatIfScenario {
    pub income_increase: Decimal,
    pub additional_section_80c: Decimal,
}

impl WhatIfScenario {
    pub fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::ensure_amount("income_increase", self.income_increase)?;
        ValidationError::ensure_amount("additional_section_80c", self.additional_section_80c)
    }

    /// Copy of `base` with this scenario applied.
    pub fn apply(
        &self,
        base: &FinancialProfile,
    ) -> FinancialProfile {
        FinancialProfile {
            gross_annual_income: base.gross_annual_income + self.income_increase,
            section_80c_investment: (base.section_80c_investment + self.additional_section_80c)
                .min(SECTION_80C_CAP),
            ..base.clone()
        }
    }
}

/// Lazy sequence of [`ProjectionPoint`]s produced by [`project`].
///
/// Cloning the iterator restarts the sweep from the first point not yet
/// taken by the original.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    base: &'a FinancialProfile,
    params: ProjectionParams,
    next_delta: Decimal,
}

impl Projection<'_> {
    fn point_at(
        &self,
        delta: Decimal,
    ) -> ProjectionPoint {
        let profile = WhatIfScenario {
            income_increase: delta,
            additional_section_80c: self.params.additional_section_80c,
        }
        .apply(self.base);

        ProjectionPoint {
            income_in_lakhs: profile.gross_annual_income / LAKH,
            old_regime_tax: evaluator(Regime::Old).evaluate(&profile).total_tax,
            new_regime_tax: evaluator(Regime::New).evaluate(&profile).total_tax,
        }
    }

    /// Points left to yield, or `None` when the count does not fit a `usize`.
    fn remaining(&self) -> Option<usize> {
        if self.next_delta > self.params.max_income_delta {
            return Some(0);
        }
        (self.params.max_income_delta - self.next_delta)
            .checked_div(self.params.income_step)
            .and_then(|steps| steps.floor().to_usize())
            .and_then(|n| n.checked_add(1))
    }
}

impl Iterator for Projection<'_> {
    type Item = ProjectionPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_delta > self.params.max_income_delta {
            return None;
        }
        let point = self.point_at(self.next_delta);
        self.next_delta += self.params.income_step;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(remaining) => (remaining, Some(remaining)),
            None => (usize::MAX, None),
        }
    }
}

/// Sweeps income from the base value upward in `income_step` increments.
///
/// Deltas run `0, step, 2·step, …` up to and including `max_income_delta`;
/// every point applies the same Section 80C top-up.
///
/// # Errors
///
/// Returns [`ValidationError`] for a profile amount, maximum, step or top-up
/// outside `0..=MAX_AMOUNT`, or a step that is not positive.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use regime_core::{FinancialProfile, project};
/// use regime_core::calculations::ProjectionParams;
///
/// let base = FinancialProfile::with_income(dec!(600000));
/// let points: Vec<_> = project(&base, ProjectionParams::default()).unwrap().collect();
///
/// assert_eq!(points.len(), 6);
/// assert_eq!(points[0].income_in_lakhs, dec!(6));
/// assert_eq!(points[5].income_in_lakhs, dec!(11));
/// ```
pub fn project(
    base: &FinancialProfile,
    params: ProjectionParams,
) -> Result<Projection<'_>, ValidationError> {
    base.validate()?;
    params.validate()?;

    Ok(Projection {
        base,
        params,
        next_delta: Decimal::ZERO,
    })
}

/// Current and projected liability for one what-if scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioImpact {
    pub scenario: WhatIfScenario,
    pub current_old: TaxCalculationResult,
    pub current_new: TaxCalculationResult,
    pub projected_old: TaxCalculationResult,
    pub projected_new: TaxCalculationResult,
}

impl ScenarioImpact {
    /// Projected minus current total tax under the old regime.
    pub fn old_delta(&self) -> Decimal {
        self.projected_old.total_tax - self.current_old.total_tax
    }

    /// Projected minus current total tax under the new regime.
    pub fn new_delta(&self) -> Decimal {
        self.projected_new.total_tax - self.current_new.total_tax
    }
}

/// Evaluates both regimes before and after applying `scenario`.
///
/// # Errors
///
/// Returns [`ValidationError`] for a profile or scenario amount outside
/// `0..=MAX_AMOUNT`.
pub fn simulate(
    base: &FinancialProfile,
    scenario: WhatIfScenario,
) -> Result<ScenarioImpact, ValidationError> {
    base.validate()?;
    scenario.validate()?;

    let projected = scenario.apply(base);
    let old = evaluator(Regime::Old);
    let new = evaluator(Regime::New);

    Ok(ScenarioImpact {
        scenario,
        current_old: old.evaluate(base),
        current_new: new.evaluate(base),
        projected_old: old.evaluate(&projected),
        projected_new: new.evaluate(&projected),
    })
}
