//! TOML profile files.
//!
//! ```toml
//! [profile]
//! gross_annual_income = 1200000
//! section_80c_investment = 100000
//! locality = "metro"
//!
//! [what_if]
//! income_step = 50000
//! ```
//!
//! Every key is optional. Missing amounts are zero, a missing locality is
//! metro, and missing `[what_if]` keys fall back to the command defaults.

use std::path::{Path, PathBuf};

use regime_core::FinancialProfile;
use regime_core::calculations::{ProjectionParams, WhatIfScenario};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ProfileFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid profile file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to render profile: {0}")]
    Render(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProfileFile {
    pub profile: FinancialProfile,
    #[serde(skip_serializing_if = "WhatIfSection::is_empty")]
    pub what_if: WhatIfSection,
}

/// Optional overrides for the `project` and `simulate` commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WhatIfSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_step: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_income_delta: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_section_80c: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub income_increase: Option<Decimal>,
}

impl WhatIfSection {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn projection_params(&self) -> ProjectionParams {
        let defaults = ProjectionParams::default();
        ProjectionParams {
            income_step: self.income_step.unwrap_or(defaults.income_step),
            max_income_delta: self.max_income_delta.unwrap_or(defaults.max_income_delta),
            additional_section_80c: self
                .additional_section_80c
                .unwrap_or(defaults.additional_section_80c),
        }
    }

    pub fn scenario(&self) -> WhatIfScenario {
        WhatIfScenario {
            income_increase: self.income_increase.unwrap_or_default(),
            additional_section_80c: self.additional_section_80c.unwrap_or_default(),
        }
    }
}

pub fn load_from_str(contents: &str) -> Result<ProfileFile, ProfileFileError> {
    let file: ProfileFile = toml::from_str(contents)?;
    debug!(
        income = %file.profile.gross_annual_income,
        locality = %file.profile.locality,
        "loaded profile file"
    );
    Ok(file)
}

pub fn load_from_file(path: &Path) -> Result<ProfileFile, ProfileFileError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ProfileFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&contents)
}

pub fn to_toml_string(file: &ProfileFile) -> Result<String, ProfileFileError> {
    Ok(toml::to_string(file)?)
}
