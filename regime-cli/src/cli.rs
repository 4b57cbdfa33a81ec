use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use regime_core::Locality;
use rust_decimal::Decimal;

use crate::profile_file::{self, ProfileFile, ProfileFileError};
use crate::utils::parse_amount;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Compare old and new Indian income tax regimes for a salaried profile.
///
/// Amounts accept digit grouping in either style, so `12,00,000` and
/// `1,200,000` are the same income.
#[derive(Debug, Parser)]
#[command(name = "regime", version)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Also append log events to this file.
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate both regimes and recommend the cheaper one.
    Compare(ProfileArgs),

    /// Sweep income upward and tabulate both regimes.
    Project {
        #[command(flatten)]
        profile: ProfileArgs,

        /// Income increment between samples.
        #[arg(long, value_parser = parse_amount)]
        step: Option<Decimal>,

        /// Largest income increase sampled.
        #[arg(long, value_parser = parse_amount)]
        max_delta: Option<Decimal>,

        /// Extra Section 80C investment applied at every sample.
        #[arg(long = "additional-80c", value_parser = parse_amount)]
        additional_80c: Option<Decimal>,
    },

    /// Show the effect of one income raise and 80C top-up.
    Simulate {
        #[command(flatten)]
        profile: ProfileArgs,

        #[arg(long, value_parser = parse_amount)]
        income_increase: Option<Decimal>,

        #[arg(long = "additional-80c", value_parser = parse_amount)]
        additional_80c: Option<Decimal>,
    },

    /// Compare every profile in a CSV file.
    Batch {
        path: PathBuf,
    },

    /// Produce a profile file from a (mock) Form 16 extraction.
    Extract {
        /// Document name, recorded in the logs only.
        #[arg(default_value = "form16.pdf")]
        document: String,

        /// Generator seed; random when omitted.
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn parse_locality(s: &str) -> Result<Locality, String> {
    Locality::parse(s).ok_or_else(|| format!("expected 'metro' or 'non-metro', got '{s}'"))
}

/// Profile source shared by the single-profile commands.
///
/// Flags override the matching keys of `--profile`.
#[derive(Debug, Clone, Default, Args)]
pub struct ProfileArgs {
    /// TOML profile file with a `[profile]` and optional `[what_if]` table.
    #[arg(long)]
    pub profile: Option<PathBuf>,

    #[arg(long, value_parser = parse_amount)]
    pub income: Option<Decimal>,

    /// House rent allowance received.
    #[arg(long, value_parser = parse_amount)]
    pub hra: Option<Decimal>,

    /// Annual rent paid.
    #[arg(long, value_parser = parse_amount)]
    pub rent: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub home_loan_interest: Option<Decimal>,

    #[arg(long = "section-80c", value_parser = parse_amount)]
    pub section_80c: Option<Decimal>,

    #[arg(long = "section-80d", value_parser = parse_amount)]
    pub section_80d: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub nps: Option<Decimal>,

    #[arg(long, value_parser = parse_amount)]
    pub other_deductions: Option<Decimal>,

    #[arg(long, value_parser = parse_locality)]
    pub locality: Option<Locality>,
}

impl ProfileArgs {
    /// Loads `--profile` (or starts from zero) and applies the flag overrides.
    pub fn resolve(&self) -> Result<ProfileFile, ProfileFileError> {
        let mut file = match &self.profile {
            Some(path) => profile_file::load_from_file(path)?,
            None => ProfileFile::default(),
        };

        let p = &mut file.profile;
        let overrides = [
            (&mut p.gross_annual_income, self.income),
            (&mut p.house_rent_allowance_received, self.hra),
            (&mut p.annual_rent_paid, self.rent),
            (&mut p.home_loan_interest_paid, self.home_loan_interest),
            (&mut p.section_80c_investment, self.section_80c),
            (&mut p.section_80d_premium, self.section_80d),
            (&mut p.nps_contribution, self.nps),
            (&mut p.other_deductions, self.other_deductions),
        ];
        for (field, value) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
        if let Some(locality) = self.locality {
            p.locality = locality;
        }

        Ok(file)
    }
}
