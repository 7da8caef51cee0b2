use chrono::NaiveDate;
use rand::RngCore;

use crate::errors::GenerationError;
use crate::generators::GeneratorContext;
use crate::schema::SchemaDefinition;

/// One synthesized contact, positionally aligned with the header.
pub type Row = Vec<String>;

/// Fully materialized header + rows for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    header: Vec<String>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Build `row_count` rows in index order.
///
/// The first failing row aborts the build; no partial dataset is returned.
pub fn build_dataset(
    schema: &SchemaDefinition,
    seed_email: &str,
    row_count: u64,
    base_date: NaiveDate,
    rng: &mut dyn RngCore,
) -> Result<Dataset, GenerationError> {
    let rows = RowStream::new(schema, seed_email, row_count, base_date, rng)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset {
        header: schema.header().into_iter().map(str::to_string).collect(),
        rows,
    })
}

/// Lazy, single-pass producer of rows `0..row_count`.
///
/// Yields at most one error, after which it is exhausted.
pub struct RowStream<'a, R: RngCore> {
    schema: &'a SchemaDefinition,
    seed_email: &'a str,
    base_date: NaiveDate,
    next: u64,
    row_count: u64,
    rng: R,
}

impl<'a, R: RngCore> RowStream<'a, R> {
    pub fn new(
        schema: &'a SchemaDefinition,
        seed_email: &'a str,
        row_count: u64,
        base_date: NaiveDate,
        rng: R,
    ) -> Self {
        Self {
            schema,
            seed_email,
            base_date,
            next: 0,
            row_count,
            rng,
        }
    }
}

impl<R: RngCore> Iterator for RowStream<'_, R> {
    type Item = Result<Row, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.row_count {
            return None;
        }
        let row_index = self.next;
        let ctx = GeneratorContext::new(self.seed_email, row_index, self.base_date);
        match self.schema.synthesize_row(&ctx, &mut self.rng) {
            Ok(row) => {
                self.next += 1;
                Some(Ok(row))
            }
            Err(source) => {
                self.next = self.row_count;
                Some(Err(GenerationError::RowSynthesisFailed {
                    row: row_index,
                    source,
                }))
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.row_count - self.next).unwrap_or(usize::MAX);
        (0, Some(remaining))
    }
}
