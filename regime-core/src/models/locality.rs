use std::fmt;

use serde::{Deserialize, Serialize};

/// City classification used by the housing-rent exemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Locality {
    #[default]
    Metro,
    NonMetro,
}

impl Locality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metro => "metro",
            Self::NonMetro => "non-metro",
        }
    }

    /// Case-insensitive; accepts `non-metro`, `non_metro` and `nonmetro`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "metro" => Some(Self::Metro),
            "non-metro" | "non_metro" | "nonmetro" => Some(Self::NonMetro),
            _ => None,
        }
    }
}

impl fmt::Display for Locality {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_known_spellings() {
        assert_eq!(Locality::parse("metro"), Some(Locality::Metro));
        assert_eq!(Locality::parse(" Metro "), Some(Locality::Metro));
        assert_eq!(Locality::parse("non-metro"), Some(Locality::NonMetro));
        assert_eq!(Locality::parse("NON_METRO"), Some(Locality::NonMetro));
        assert_eq!(Locality::parse("nonmetro"), Some(Locality::NonMetro));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Locality::parse("suburb"), None);
        assert_eq!(Locality::parse(""), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for locality in [Locality::Metro, Locality::NonMetro] {
            assert_eq!(Locality::parse(locality.as_str()), Some(locality));
        }
    }
}
