use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The body category that selects a garment range and a measurement schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

/// Returned when a gender tag is not `male` or `female`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized gender `{0}` (expected `male` or `female`)")]
pub struct ParseGenderError(pub String);

impl Gender {
    /// Returns the lowercase tag used in records and prompts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses `male` or `female`, ignoring case and surrounding whitespace.
impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ParseGenderError(s.to_string())),
        }
    }
}
