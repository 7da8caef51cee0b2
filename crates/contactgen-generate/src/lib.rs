//! Contact row generation engine for contactgen.
//!
//! This crate maps each schema variant to its column table, synthesizes fake
//! contact rows with a deterministic alias email, and exports them as CSV.

pub mod dataset;
pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;
pub mod schema;

pub use dataset::{Dataset, Row, RowStream, build_dataset};
pub use engine::{GenerationEngine, GenerationResult};
pub use errors::GenerationError;
pub use model::{GenerateOptions, GenerationReport};
pub use schema::{ColumnSpec, SchemaDefinition, registry, resolve, schema_for};
