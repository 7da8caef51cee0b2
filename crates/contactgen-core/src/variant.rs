use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// CSV import layout selected by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Seven-column contact-manager layout.
    #[default]
    Simple,
    /// Groupware / email-client contact export layout.
    Extended,
}

impl Variant {
    /// Every variant, in prompt order. The first entry is the default.
    pub const ALL: [Variant; 2] = [Variant::Simple, Variant::Extended];

    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "simple" => Ok(Self::Simple),
            "extended" => Ok(Self::Extended),
            other => Err(Error::UnknownVariant(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Simple => "simple",
            Self::Extended => "extended",
        }
    }

    pub fn identifiers() -> Vec<&'static str> {
        Self::ALL.iter().map(|variant| variant.as_str()).collect()
    }
}

impl FromStr for Variant {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
