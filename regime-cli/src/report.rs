//! Plain-text rendering of comparison, projection and simulation output.
//!
//! Amounts are rounded and grouped here only; the values carried by the core
//! types stay exact.

use std::fmt;

use regime_core::calculations::ScenarioImpact;
use regime_core::calculations::common::{format_inr, round_half_up};
use regime_core::{ProjectionPoint, Regime, TaxCalculationResult, TaxComparison};
use rust_decimal::Decimal;
use serde::Serialize;

const LABEL_WIDTH: usize = 20;
const COLUMN_WIDTH: usize = 16;

fn percent(value: Decimal) -> String {
    format!("{}%", round_half_up(value))
}

fn signed_inr(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", format_inr(value))
    } else {
        format_inr(value)
    }
}

fn row(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    cells: &[String],
) -> fmt::Result {
    write!(f, "{label:<LABEL_WIDTH$}")?;
    for cell in cells {
        write!(f, "{cell:>COLUMN_WIDTH$}")?;
    }
    writeln!(f)
}

fn result_rows(
    f: &mut fmt::Formatter<'_>,
    old: &TaxCalculationResult,
    new: &TaxCalculationResult,
) -> fmt::Result {
    let amounts: [(&str, fn(&TaxCalculationResult) -> Decimal); 8] = [
        ("Gross income", |r| r.gross_income),
        ("Total deductions", |r| r.total_deductions),
        ("Taxable income", |r| r.taxable_income),
        ("Tax before rebate", |r| r.tax_before_rebate),
        ("Rebate", |r| r.rebate),
        ("Tax after rebate", |r| r.tax_payable),
        ("Cess (4%)", |r| r.cess),
        ("Total tax", |r| r.total_tax),
    ];
    for (label, field) in amounts {
        row(f, label, &[format_inr(field(old)), format_inr(field(new))])?;
    }
    row(
        f,
        "Effective rate",
        &[percent(old.effective_rate_percent), percent(new.effective_rate_percent)],
    )
}

fn header(f: &mut fmt::Formatter<'_>) -> fmt::Result {
    row(
        f,
        "",
        &[Regime::Old.label().to_string(), Regime::New.label().to_string()],
    )
}

/// Side-by-side breakdown, verdict and recommendations.
pub struct ComparisonReport<'a>(pub &'a TaxComparison);

impl fmt::Display for ComparisonReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let comparison = self.0;
        header(f)?;
        result_rows(f, &comparison.old_regime, &comparison.new_regime)?;
        writeln!(f)?;

        if comparison.absolute_savings.is_zero() {
            writeln!(
                f,
                "Recommended: {} (both regimes cost the same)",
                comparison.recommended_regime
            )?;
        } else {
            writeln!(
                f,
                "Recommended: {} (saves {})",
                comparison.recommended_regime,
                format_inr(comparison.absolute_savings)
            )?;
        }

        if comparison.recommendations.is_empty() {
            return Ok(());
        }
        writeln!(f)?;
        writeln!(f, "Recommendations:")?;
        for (index, rec) in comparison.recommendations.iter().enumerate() {
            writeln!(
                f,
                "  {}. [{}] {}: save up to {}",
                index + 1,
                rec.priority.as_str(),
                rec.title,
                format_inr(rec.potential_savings)
            )?;
            writeln!(f, "     {}", rec.description)?;
        }
        Ok(())
    }
}

/// Income sweep table, whole rupees.
pub struct ProjectionReport<'a>(pub &'a [ProjectionPoint]);

impl fmt::Display for ProjectionReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        row(
            f,
            "Income (lakh)",
            &[
                Regime::Old.label().to_string(),
                Regime::New.label().to_string(),
                "Cheaper".to_string(),
            ],
        )?;
        for point in self.0.iter().map(ProjectionPoint::rounded) {
            let cheaper = if point.old_regime_tax <= point.new_regime_tax {
                Regime::Old
            } else {
                Regime::New
            };
            row(
                f,
                &round_half_up(point.income_in_lakhs).normalize().to_string(),
                &[
                    format_inr(point.old_regime_tax),
                    format_inr(point.new_regime_tax),
                    cheaper.as_str().to_string(),
                ],
            )?;
        }
        Ok(())
    }
}

/// Before and after totals for a single what-if scenario.
pub struct ScenarioReport<'a>(pub &'a ScenarioImpact);

impl fmt::Display for ScenarioReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let impact = self.0;
        writeln!(
            f,
            "Scenario: income {}, Section 80C {}",
            signed_inr(impact.scenario.income_increase),
            signed_inr(impact.scenario.additional_section_80c)
        )?;
        writeln!(f)?;
        header(f)?;
        row(
            f,
            "Current total tax",
            &[
                format_inr(impact.current_old.total_tax),
                format_inr(impact.current_new.total_tax),
            ],
        )?;
        row(
            f,
            "Projected total tax",
            &[
                format_inr(impact.projected_old.total_tax),
                format_inr(impact.projected_new.total_tax),
            ],
        )?;
        row(
            f,
            "Change",
            &[signed_inr(impact.old_delta()), signed_inr(impact.new_delta())],
        )
    }
}

/// One named comparison in a batch run.
#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub row: usize,
    pub name: String,
    pub comparison: TaxComparison,
}

/// One summary line per profile.
pub struct BatchReport<'a>(pub &'a [BatchEntry]);

impl fmt::Display for BatchReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let name_width = self
            .0
            .iter()
            .map(|entry| entry.name.chars().count())
            .max()
            .unwrap_or(0)
            .max("Name".len());

        write!(f, "{:<name_width$}", "Name")?;
        for title in [Regime::Old.label(), Regime::New.label(), "Recommended", "Savings"] {
            write!(f, "{title:>COLUMN_WIDTH$}")?;
        }
        writeln!(f)?;

        for entry in self.0 {
            let comparison = &entry.comparison;
            write!(f, "{:<name_width$}", entry.name)?;
            for cell in [
                format_inr(comparison.old_regime.total_tax),
                format_inr(comparison.new_regime.total_tax),
                comparison.recommended_regime.as_str().to_string(),
                format_inr(comparison.absolute_savings),
            ] {
                write!(f, "{cell:>COLUMN_WIDTH$}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
