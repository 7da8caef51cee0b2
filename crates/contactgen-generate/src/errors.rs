use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("unknown variant '{0}' (expected one of: {list})", list = contactgen_core::Variant::identifiers().join(", "))]
    UnknownVariant(String),
    #[error("row {row} synthesis failed: {source}")]
    RowSynthesisFailed {
        row: u64,
        source: contactgen_core::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}
