use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use contactgen_core::{UserInput, Variant, parse_row_count};
use contactgen_generate::resolve;

use crate::CliError;
use crate::settings::DefaultsSettings;

/// Line-oriented question/answer over any reader and writer.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `question` and read one answer. End of input reads as blank.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();
        self.input.read_line(&mut answer)?;
        Ok(answer.trim().to_string())
    }

    /// Print one line of output.
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }
}

/// Inputs already supplied on the command line; those skip their prompt.
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub rows: Option<u64>,
    pub email: Option<String>,
    pub output_file: Option<PathBuf>,
    pub variant: Option<String>,
}

/// Gather the four inputs in order (rows, email, output file, variant),
/// applying `defaults` to blank answers.
pub fn collect_input<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: Preset,
    defaults: &DefaultsSettings,
) -> Result<UserInput, CliError> {
    let rows = match preset.rows {
        Some(rows) => rows,
        None => {
            let answer = prompter.ask(&format!(
                "Number of rows to generate: (default: {}) ",
                defaults.rows
            ))?;
            parse_row_count(&answer, defaults.rows)?
        }
    };

    let email = match preset.email {
        Some(email) => email,
        None => prompter.ask("Email address for the contact: ")?,
    };

    let output_file = match preset.output_file {
        Some(path) => path,
        None => {
            let answer = prompter.ask(&format!(
                "Output file name: (default: {}) ",
                defaults.output_file.display()
            ))?;
            if answer.is_empty() {
                defaults.output_file.clone()
            } else {
                PathBuf::from(answer)
            }
        }
    };

    let variant = match preset.variant {
        Some(variant) => resolve_variant(&variant)?,
        None => {
            let answer = prompter.ask(&format!(
                "Contact format ({}): (default: {}) ",
                Variant::identifiers().join(", "),
                defaults.variant
            ))?;
            if answer.is_empty() {
                defaults.variant
            } else {
                resolve_variant(&answer)?
            }
        }
    };

    Ok(UserInput::new(rows, email, output_file, variant)?)
}

fn resolve_variant(id: &str) -> Result<Variant, CliError> {
    resolve(id)
        .map(|schema| schema.variant)
        .map_err(CliError::UnknownVariant)
}
