use std::fmt::Display;

use anyhow::{Context, Result};
use regime_core::calculations::{ProjectionParams, ScenarioImpact, WhatIfScenario, common::format_inr};
use regime_core::{FinancialProfile, ProjectionPoint, TaxComparison, compare, project, simulate};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{Cli, Command, OutputFormat};
use crate::csv_loader;
use crate::extraction::{DocumentExtractor, MockForm16Extractor};
use crate::profile_file::{self, ProfileFile};
use crate::report::{BatchEntry, BatchReport, ComparisonReport, ProjectionReport, ScenarioReport};

fn render<T: Serialize>(
    format: OutputFormat,
    value: &T,
    text: impl Display,
) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(text.to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(value).context("failed to serialise output")
        }
    }
}

#[derive(Serialize)]
struct SimulationOutput<'a> {
    #[serde(flatten)]
    impact: &'a ScenarioImpact,
    old_delta: Decimal,
    new_delta: Decimal,
}

/// Runs the parsed command and returns what should be printed to stdout.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Compare(args) => {
            let file = args.resolve()?;
            run_compare(&file.profile, cli.format)
        }
        Command::Project {
            profile,
            step,
            max_delta,
            additional_80c,
        } => {
            let file = profile.resolve()?;
            let defaults = file.what_if.projection_params();
            let params = ProjectionParams {
                income_step: step.unwrap_or(defaults.income_step),
                max_income_delta: max_delta.unwrap_or(defaults.max_income_delta),
                additional_section_80c: additional_80c.unwrap_or(defaults.additional_section_80c),
            };
            run_project(&file.profile, params, cli.format)
        }
        Command::Simulate {
            profile,
            income_increase,
            additional_80c,
        } => {
            let file = profile.resolve()?;
            let defaults = file.what_if.scenario();
            let scenario = WhatIfScenario {
                income_increase: income_increase.unwrap_or(defaults.income_increase),
                additional_section_80c: additional_80c.unwrap_or(defaults.additional_section_80c),
            };
            run_simulate(&file.profile, scenario, cli.format)
        }
        Command::Batch { path } => {
            let records = csv_loader::load_from_file(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let entries = records
                .into_iter()
                .map(|record| -> Result<BatchEntry> {
                    Ok(BatchEntry {
                        comparison: compare(&record.profile)?,
                        row: record.row,
                        name: record.name,
                    })
                })
                .collect::<Result<Vec<_>>>()?;
            info!(profiles = entries.len(), "batch comparison complete");
            render(cli.format, &entries, BatchReport(&entries))
        }
        Command::Extract { document, seed } => {
            let seed = seed.unwrap_or_else(rand::random);
            run_extract(document, seed, cli.format)
        }
    }
}

pub fn run_compare(
    profile: &FinancialProfile,
    format: OutputFormat,
) -> Result<String> {
    let comparison: TaxComparison = compare(profile)?;
    info!(
        recommended = %comparison.recommended_regime,
        savings = %comparison.absolute_savings,
        "comparison complete"
    );
    render(format, &comparison, ComparisonReport(&comparison))
}

pub fn run_project(
    profile: &FinancialProfile,
    params: ProjectionParams,
    format: OutputFormat,
) -> Result<String> {
    let points: Vec<ProjectionPoint> = project(profile, params)?.collect();
    debug!(points = points.len(), "projection complete");
    render(format, &points, ProjectionReport(&points))
}

pub fn run_simulate(
    profile: &FinancialProfile,
    scenario: WhatIfScenario,
    format: OutputFormat,
) -> Result<String> {
    let impact = simulate(profile, scenario)?;
    let output = SimulationOutput {
        impact: &impact,
        old_delta: impact.old_delta(),
        new_delta: impact.new_delta(),
    };
    render(format, &output, ScenarioReport(&impact))
}

/// Text output is a loadable profile file with the extraction details as
/// leading comments.
pub fn run_extract(
    document: &str,
    seed: u64,
    format: OutputFormat,
) -> Result<String> {
    let extraction = MockForm16Extractor::with_seed(seed).extract(document);
    match format {
        OutputFormat::Json => render(format, &extraction, ""),
        OutputFormat::Text => {
            let file = ProfileFile {
                profile: extraction.profile.clone(),
                ..ProfileFile::default()
            };
            let body = profile_file::to_toml_string(&file)?;
            Ok(format!(
                "# Mock Form 16 extraction of {document} (seed {seed})\n\
                 # confidence {}%, tax deducted at source {}\n{body}",
                extraction.confidence_percent,
                format_inr(extraction.tax_deducted_at_source),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use regime_core::{Locality, Regime};
    use rust_decimal_macros::dec;
    use serde_json::Value;

    fn amount(value: &Value) -> Decimal {
        value.as_str().expect("amounts serialise as strings").parse().unwrap()
    }

    fn capped_deductions() -> FinancialProfile {
        FinancialProfile {
            gross_annual_income: dec!(1200000),
            section_80c_investment: dec!(150000),
            section_80d_premium: dec!(25000),
            ..FinancialProfile::default()
        }
    }

    #[test]
    fn compare_json_exposes_both_regimes() {
        let json = run_compare(&capped_deductions(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(amount(&value["old_regime"]["total_deductions"]), dec!(175000));
        assert_eq!(amount(&value["old_regime"]["total_tax"]), dec!(130000));
        assert_eq!(value["old_regime"]["regime"], "old");
        assert_eq!(value["new_regime"]["regime"], "new");
        assert!(value["recommendations"].is_array());
    }

    #[test]
    fn compare_rejects_negative_amounts() {
        let profile = FinancialProfile {
            section_80d_premium: dec!(-1),
            ..capped_deductions()
        };
        let err = run_compare(&profile, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("section_80d_premium"));
    }

    #[test]
    fn project_json_is_exact_point_list() {
        let profile = FinancialProfile::with_income(dec!(600000));
        let json = run_project(&profile, ProjectionParams::default(), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let points = value.as_array().unwrap();
        assert_eq!(points.len(), 6);
        assert_eq!(amount(&points[0]["income_in_lakhs"]), dec!(6));
        assert_eq!(amount(&points[0]["new_regime_tax"]), Decimal::ZERO);
    }

    #[test]
    fn project_rejects_zero_step() {
        let params = ProjectionParams {
            income_step: Decimal::ZERO,
            ..ProjectionParams::default()
        };
        let err = run_project(&capped_deductions(), params, OutputFormat::Text).unwrap_err();
        assert!(err.to_string().contains("step"));
    }

    #[test]
    fn simulate_json_carries_deltas() {
        let scenario = WhatIfScenario {
            income_increase: dec!(100000),
            additional_section_80c: Decimal::ZERO,
        };
        let json = run_simulate(&capped_deductions(), scenario, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        let old_delta = amount(&value["old_delta"]);
        assert!(old_delta > Decimal::ZERO);
        assert_eq!(
            old_delta,
            amount(&value["projected_old"]["total_tax"]) - amount(&value["current_old"]["total_tax"])
        );
        assert_eq!(amount(&value["scenario"]["income_increase"]), dec!(100000));
    }

    #[test]
    fn extract_text_is_a_loadable_profile_file() {
        let text = run_extract("form16.pdf", 11, OutputFormat::Text).unwrap();
        assert!(text.starts_with("# Mock Form 16 extraction of form16.pdf (seed 11)"));

        let file = profile_file::load_from_str(&text).unwrap();
        let expected = MockForm16Extractor::with_seed(11).extract("form16.pdf").profile;
        assert_eq!(file.profile, expected);
        assert_eq!(file.profile.locality, Locality::Metro);
    }

    #[test]
    fn extract_json_includes_extraction_metadata() {
        let json = run_extract("form16.pdf", 11, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert!(value["confidence_percent"].is_u64());
        assert!(value["profile"]["gross_annual_income"].is_string());
    }

    #[test]
    fn text_compare_names_recommended_regime() {
        let text = run_compare(&FinancialProfile::with_income(dec!(650000)), OutputFormat::Text).unwrap();
        assert!(text.contains(&format!("Recommended: {}", Regime::New)));
    }
}
