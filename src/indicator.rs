//! Detail record indicator flag.

use crate::error::{AbaError, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Single-character flag on a detail record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Indicator {
    /// Blank.
    #[default]
    None,
    /// `N`: new or varied BSB or account number.
    NewOrVariedBsb,
    /// `W`: dividend paid to a resident of a country with a double tax agreement.
    DoubleTaxTreatyDividend,
    /// `X`: dividend paid to a resident of any other country.
    OtherCountryDividend,
    /// `Y`: interest paid to a non-resident.
    NonResidentInterest,
}

impl Indicator {
    pub const fn as_char(self) -> char {
        match self {
            Indicator::None => ' ',
            Indicator::NewOrVariedBsb => 'N',
            Indicator::DoubleTaxTreatyDividend => 'W',
            Indicator::OtherCountryDividend => 'X',
            Indicator::NonResidentInterest => 'Y',
        }
    }
}

impl FromStr for Indicator {
    type Err = AbaError;

    /// Blank input maps to [`Indicator::None`].
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "" => Ok(Indicator::None),
            "N" => Ok(Indicator::NewOrVariedBsb),
            "W" => Ok(Indicator::DoubleTaxTreatyDividend),
            "X" => Ok(Indicator::OtherCountryDividend),
            "Y" => Ok(Indicator::NonResidentInterest),
            other => Err(AbaError::validation(
                "indicator",
                format!("{:?} is not one of blank, N, W, X, Y", other),
            )),
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl<'de> Deserialize<'de> for Indicator {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Indicator::from_str(&s).map_err(serde::de::Error::custom)
    }
}
