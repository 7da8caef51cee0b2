use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use contactgen_core::UserInput;

use crate::dataset::{RowStream, build_dataset};
use crate::errors::GenerationError;
use crate::model::{GenerateOptions, GenerationReport};
use crate::output::csv::{write_dataset_csv, write_records_csv};
use crate::schema::schema_for;

/// Result of a generation run.
#[derive(Debug, Clone)]
pub struct GenerationResult {
    pub report: GenerationReport,
}

/// Entry point for generating a contact CSV from operator input.
#[derive(Debug, Clone, Default)]
pub struct GenerationEngine {
    options: GenerateOptions,
}

impl GenerationEngine {
    pub fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Resolve the layout, synthesize every row and export the CSV.
    ///
    /// The output file is only replaced when every step succeeds.
    pub fn run(&self, input: &UserInput) -> Result<GenerationResult, GenerationError> {
        let start = Instant::now();
        let schema = schema_for(input.variant());
        let seed = self.options.seed.unwrap_or_else(rand::random);
        let base_date = self.options.effective_base_date();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let output = input.output_file();

        info!(
            variant = %input.variant(),
            rows = input.row_count(),
            seed,
            base_date = %base_date,
            streaming = self.options.streaming,
            output = %output.display(),
            "generation started"
        );

        let summary = if self.options.streaming {
            let rows = RowStream::new(
                schema,
                input.email(),
                input.row_count(),
                base_date,
                &mut rng,
            );
            write_records_csv(output, &schema.header(), rows)?
        } else {
            let dataset = build_dataset(
                schema,
                input.email(),
                input.row_count(),
                base_date,
                &mut rng,
            )?;
            info!(rows = dataset.len(), columns = dataset.header().len(), "dataset built");
            write_dataset_csv(output, &dataset)?
        };

        let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            path = %output.display(),
            rows = summary.rows_written,
            bytes = summary.bytes_written,
            duration_ms,
            "csv written"
        );

        Ok(GenerationResult {
            report: GenerationReport {
                variant: input.variant(),
                rows_requested: input.row_count(),
                rows_written: summary.rows_written,
                columns: schema.column_count(),
                seed,
                base_date,
                streaming: self.options.streaming,
                output: output.to_path_buf(),
                bytes_written: summary.bytes_written,
                duration_ms,
            },
        })
    }
}
