//! Core contracts and helpers for contactgen.
//!
//! This crate defines the validated operator input, the enumerated schema
//! variants, and the email helpers shared by the generator and the CLI.

pub mod alias;
pub mod error;
pub mod input;
pub mod validation;
pub mod variant;

pub use alias::{ALIAS_TAG, alias_email};
pub use error::{Error, Result};
pub use input::{DEFAULT_OUTPUT_FILE, DEFAULT_ROW_COUNT, UserInput, parse_row_count};
pub use validation::{validate_email, validate_output_path};
pub use variant::Variant;
