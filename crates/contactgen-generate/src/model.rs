use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use contactgen_core::Variant;

use crate::errors::GenerationError;

/// Options for the generation engine.
#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    /// Seed for every non-email value. A random seed is drawn when unset.
    pub seed: Option<u64>,
    /// Anchor for past dates. Defaults to 2024-01-01 for seeded runs and to
    /// today otherwise.
    pub base_date: Option<NaiveDate>,
    /// Write rows as they are produced instead of materializing the dataset.
    pub streaming: bool,
}

impl GenerateOptions {
    pub fn effective_base_date(&self) -> NaiveDate {
        match (self.base_date, self.seed) {
            (Some(date), _) => date,
            (None, Some(_)) => NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            (None, None) => Utc::now().date_naive(),
        }
    }
}

/// Report for a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationReport {
    pub variant: Variant,
    pub rows_requested: u64,
    pub rows_written: u64,
    pub columns: usize,
    pub seed: u64,
    pub base_date: NaiveDate,
    pub streaming: bool,
    pub output: PathBuf,
    pub bytes_written: u64,
    pub duration_ms: u64,
}

impl GenerationReport {
    /// Write the report as pretty JSON.
    pub fn write_json(&self, path: &Path) -> Result<(), GenerationError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_vec_pretty(self)?)?;
        Ok(())
    }
}
