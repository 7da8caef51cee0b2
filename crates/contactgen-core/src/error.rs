use thiserror::Error;

/// Core error type shared across contactgen crates.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The seed email is not a usable address.
    #[error("invalid email: {0}")]
    InvalidEmail(String),
    /// The requested row count is not a non-negative integer.
    #[error("invalid row count: {0}")]
    InvalidRowCount(String),
    /// The output path is empty.
    #[error("invalid output path: path must not be empty")]
    InvalidOutputPath,
    /// The variant identifier is not one of the supported layouts.
    #[error("unknown variant '{0}' (expected one of: {list})", list = crate::Variant::identifiers().join(", "))]
    UnknownVariant(String),
}

/// Convenience alias for results returned by contactgen crates.
pub type Result<T> = std::result::Result<T, Error>;
