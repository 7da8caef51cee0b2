use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{Error, Result};
use crate::validation::{validate_email, validate_output_path};
use crate::variant::Variant;

/// Row count used when the operator leaves the answer blank.
pub const DEFAULT_ROW_COUNT: u64 = 10_000;
/// Output path used when the operator leaves the answer blank.
pub const DEFAULT_OUTPUT_FILE: &str = "random_contacts.csv";

/// Validated operator input for a single run.
///
/// Constructed once through [`UserInput::new`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserInput {
    row_count: u64,
    email: String,
    output_file: PathBuf,
    variant: Variant,
}

impl UserInput {
    pub fn new(
        row_count: u64,
        email: impl Into<String>,
        output_file: impl Into<PathBuf>,
        variant: Variant,
    ) -> Result<Self> {
        let email = email.into().trim().to_string();
        validate_email(&email)?;

        let output_file = output_file.into();
        validate_output_path(&output_file.to_string_lossy())?;

        Ok(Self {
            row_count,
            email,
            output_file,
            variant,
        })
    }

    pub fn row_count(&self) -> u64 {
        self.row_count
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn output_file(&self) -> &Path {
        &self.output_file
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }
}

/// Parse a row-count answer; blank answers fall back to `default`.
pub fn parse_row_count(answer: &str, default: u64) -> Result<u64> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Ok(default);
    }
    answer
        .replace('_', "")
        .parse::<u64>()
        .map_err(|_| Error::InvalidRowCount(answer.to_string()))
}
