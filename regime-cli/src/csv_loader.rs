//! CSV loader for batch comparisons.
//!
//! ## CSV Format
//!
//! Headers are matched by name, so column order does not matter. Only
//! `gross_annual_income` is required; every other column may be omitted
//! entirely or left empty on a given row.
//!
//! | Column | Required | Type | Notes |
//! |---------------------------------|----------|---------|----------------------------------|
//! | `name` | no | string | Defaults to `row N` |
//! | `gross_annual_income` | yes | decimal | e.g. `1200000` |
//! | `house_rent_allowance_received` | no | decimal | Empty means 0 |
//! | `annual_rent_paid` | no | decimal | Empty means 0 |
//! | `home_loan_interest_paid` | no | decimal | Empty means 0 |
//! | `section_80c_investment` | no | decimal | Empty means 0 |
//! | `section_80d_premium` | no | decimal | Empty means 0 |
//! | `nps_contribution` | no | decimal | Empty means 0 |
//! | `other_deductions` | no | decimal | Empty means 0 |
//! | `locality` | no | string | `metro` (default) or `non-metro` |
//!
//! ### Minimal example
//!
//! ```csv
//! gross_annual_income
//! 1200000
//! ```
use rust_decimal::Decimal;
use serde::Deserialize;

use regime_core::{FinancialProfile, Locality, ValidationError};

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: Option<String>,
    gross_annual_income: Decimal,
    house_rent_allowance_received: Option<Decimal>,
    annual_rent_paid: Option<Decimal>,
    home_loan_interest_paid: Option<Decimal>,
    section_80c_investment: Option<Decimal>,
    section_80d_premium: Option<Decimal>,
    nps_contribution: Option<Decimal>,
    other_deductions: Option<Decimal>,
    locality: Option<String>,
}

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One named profile read from a batch file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileRecord {
    /// 1-based data row (the header is row 0).
    pub row: usize,
    pub name: String,
    pub profile: FinancialProfile,
}

/// Errors that can occur while loading or converting CSV data.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// Bad structure, missing required column, or a cell that is not a number.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    #[error("unrecognised locality '{value}' on row {row}")]
    InvalidLocality { value: String, row: usize },

    #[error("row {row}: {source}")]
    Invalid {
        row: usize,
        #[source]
        source: ValidationError,
    },

    #[error("failed to read CSV file: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<ProfileRecord, CsvLoadError> {
    let locality = match row.locality {
        None => Locality::default(),
        Some(value) => Locality::parse(&value)
            .ok_or(CsvLoadError::InvalidLocality { value, row: row_number })?,
    };

    let profile = FinancialProfile {
        gross_annual_income: row.gross_annual_income,
        house_rent_allowance_received: row.house_rent_allowance_received.unwrap_or_default(),
        annual_rent_paid: row.annual_rent_paid.unwrap_or_default(),
        home_loan_interest_paid: row.home_loan_interest_paid.unwrap_or_default(),
        section_80c_investment: row.section_80c_investment.unwrap_or_default(),
        section_80d_premium: row.section_80d_premium.unwrap_or_default(),
        nps_contribution: row.nps_contribution.unwrap_or_default(),
        other_deductions: row.other_deductions.unwrap_or_default(),
        locality,
    };
    profile.validate().map_err(|source| CsvLoadError::Invalid {
        row: row_number,
        source,
    })?;

    Ok(ProfileRecord {
        row: row_number,
        name: row.name.unwrap_or_else(|| format!("row {row_number}")),
        profile,
    })
}

/// Parse CSV text and return the profiles in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] if the CSV is structurally invalid or a field
///   cannot be deserialised.
/// * [CsvLoadError::InvalidLocality] for an unrecognised locality.
/// * [CsvLoadError::Invalid] for a negative amount.
pub fn load_from_str(input: &str) -> Result<Vec<ProfileRecord>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    let records = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(count = records.len(), "loaded batch profiles");
    Ok(records)
}

/// Read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<ProfileRecord>, CsvLoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    const MINIMAL_CSV: &str = "\
gross_annual_income
1200000
";

    const FULL_CSV: &str = "\
name,gross_annual_income,house_rent_allowance_received,annual_rent_paid,home_loan_interest_paid,section_80c_investment,section_80d_premium,nps_contribution,other_deductions,locality
Asha,1800000,240000,300000,150000,100000,20000,30000,5000,non-metro
";

    const SPARSE_CSV: &str = "\
name,gross_annual_income,section_80c_investment,locality
Asha,1200000,150000,metro
,900000,,
Ravi,1500000,50000,NON-METRO
";

    #[test]
    fn minimal_row_defaults_everything_else() {
        let records = load_from_str(MINIMAL_CSV).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].row, 1);
        assert_eq!(records[0].name, "row 1");
        assert_eq!(records[0].profile, FinancialProfile::with_income(dec!(1200000)));
    }

    #[test]
    fn full_row_maps_every_column() {
        let records = load_from_str(FULL_CSV).unwrap();
        let p = &records[0].profile;

        assert_eq!(records[0].name, "Asha");
        assert_eq!(p.gross_annual_income, dec!(1800000));
        assert_eq!(p.house_rent_allowance_received, dec!(240000));
        assert_eq!(p.annual_rent_paid, dec!(300000));
        assert_eq!(p.home_loan_interest_paid, dec!(150000));
        assert_eq!(p.section_80c_investment, dec!(100000));
        assert_eq!(p.section_80d_premium, dec!(20000));
        assert_eq!(p.nps_contribution, dec!(30000));
        assert_eq!(p.other_deductions, dec!(5000));
        assert_eq!(p.locality, Locality::NonMetro);
    }

    #[test]
    fn empty_cells_are_zero_and_metro() {
        let records = load_from_str(SPARSE_CSV).unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1].name, "row 2");
        assert_eq!(records[1].profile.section_80c_investment, Decimal::ZERO);
        assert_eq!(records[1].profile.locality, Locality::Metro);
        assert_eq!(records[2].profile.locality, Locality::NonMetro);
    }

    #[test]
    fn whitespace_around_values_is_trimmed() {
        let csv = "name , gross_annual_income , locality\n  Asha ,  1200000 , metro \n";
        let records = load_from_str(csv).unwrap();

        assert_eq!(records[0].name, "Asha");
        assert_eq!(records[0].profile.gross_annual_income, dec!(1200000));
    }

    #[test]
    fn missing_income_column_is_parse_error() {
        let err = load_from_str("name,section_80c_investment\nAsha,1000\n").unwrap_err();
        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn non_numeric_amount_is_parse_error() {
        let err = load_from_str("gross_annual_income\ntwelve lakh\n").unwrap_err();
        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn invalid_locality_reports_row() {
        let csv = "gross_annual_income,locality\n1200000,metro\n900000,rural\n";
        let err = load_from_str(csv).unwrap_err();

        match err {
            CsvLoadError::InvalidLocality { value, row } => {
                assert_eq!(value, "rural");
                assert_eq!(row, 2);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn negative_amount_reports_row_and_field() {
        let csv = "gross_annual_income,nps_contribution\n1200000,\n900000,-100\n";
        let err = load_from_str(csv).unwrap_err();

        assert_eq!(
            err.to_string(),
            "row 2: nps_contribution must be non-negative, got -100"
        );
    }

    #[test]
    fn ragged_row_is_rejected() {
        let err = load_from_str("gross_annual_income,locality\n1200000\n").unwrap_err();
        assert!(matches!(err, CsvLoadError::Parse(_)));
    }

    #[test]
    fn header_only_yields_no_records() {
        let records = load_from_str("gross_annual_income,locality\n").unwrap();
        assert!(records.is_empty());
    }
}
