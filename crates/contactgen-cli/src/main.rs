mod logging;
mod prompt;
mod settings;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use contactgen_core::Error as CoreError;
use contactgen_generate::{GenerateOptions, GenerationEngine, GenerationError, registry};
use thiserror::Error;

use logging::{FAILURE_TARGET, init_logging};
use prompt::{Preset, Prompter, collect_input};
use settings::{Settings, load_settings};

#[derive(Debug, Error)]
enum CliError {
    #[error("invalid input: {0}")]
    Input(#[from] CoreError),
    #[error("invalid input: {0}")]
    UnknownVariant(GenerationError),
    #[error("error writing csv file: {0}")]
    Generation(#[from] GenerationError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "contactgen",
    version,
    about = "Generate synthetic contacts as an importable CSV file"
)]
struct Cli {
    /// Number of rows to generate (prompted when omitted).
    #[arg(long)]
    rows: Option<u64>,
    /// Seed email address; each row gets a tagged alias of it.
    #[arg(long)]
    email: Option<String>,
    /// Output CSV path.
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,
    /// Contact format: simple or extended.
    #[arg(long)]
    variant: Option<String>,
    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
    /// Date that birthdays and anniversaries are counted back from
    /// (YYYY-MM-DD). Defaults to 2024-01-01 with a seed, else today.
    #[arg(long, value_name = "DATE")]
    base_date: Option<NaiveDate>,
    /// Write rows incrementally instead of building the dataset in memory.
    #[arg(long, default_value_t = false)]
    stream: bool,
    /// Write a JSON run report to this path.
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,
    /// Settings file (defaults to ./contactgen.toml when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Log filter, overridden by RUST_LOG.
    #[arg(long)]
    log_level: Option<String>,
    /// Append JSON logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
    /// List the supported contact formats and exit.
    #[arg(long, default_value_t = false)]
    list_variants: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    let result = configure(&cli).and_then(|settings| run(cli, &settings, &mut prompter));
    ExitCode::from(exit_status(result, &mut io::stderr()))
}

/// Load settings and install the global subscriber.
fn configure(cli: &Cli) -> Result<Settings, CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    let level = cli.log_level.as_deref().unwrap_or(&settings.logging.level);
    let log_file = cli.log_file.as_deref().or(settings.logging.file.as_deref());
    init_logging(level, log_file)?;
    Ok(settings)
}

fn run<R: BufRead, W: Write>(
    cli: Cli,
    settings: &Settings,
    prompter: &mut Prompter<R, W>,
) -> Result<(), CliError> {
    if cli.list_variants {
        for schema in registry() {
            prompter.say(&format!(
                "{} ({} columns)",
                schema.variant,
                schema.column_count()
            ))?;
        }
        return Ok(());
    }

    let preset = Preset {
        rows: cli.rows,
        email: cli.email,
        output_file: cli.out,
        variant: cli.variant,
    };
    let input = collect_input(prompter, preset, &settings.defaults)?;
    tracing::info!(event = "input_collected", rows = input.row_count(), variant = %input.variant());

    let options = GenerateOptions {
        seed: cli.seed.or(settings.defaults.seed),
        base_date: cli.base_date,
        streaming: cli.stream,
    };
    let result = GenerationEngine::new(options).run(&input)?;

    if let Some(path) = cli.report.as_deref() {
        result.report.write_json(path)?;
        tracing::info!(event = "report_written", path = %path.display());
    }

    prompter.say(&format!(
        "Finish writing csv file: {} ({} rows, seed {})",
        result.report.output.display(),
        result.report.rows_written,
        result.report.seed
    ))?;
    Ok(())
}

/// Report the outcome on `stderr` and map it to a process exit status.
///
/// Failures are also logged under [`FAILURE_TARGET`], which only the JSON
/// file layer records.
fn exit_status<W: Write>(result: Result<(), CliError>, stderr: &mut W) -> u8 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            tracing::error!(target: FAILURE_TARGET, error = %err, "run failed");
            let _ = writeln!(stderr, "{err}");
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::path::Path;

    use super::*;

    fn run_with(args: &[&str], answers: &str) -> (Result<(), CliError>, String) {
        let cli = Cli::try_parse_from(std::iter::once("contactgen").chain(args.iter().copied()))
            .expect("parse args");
        let mut output = Vec::new();
        let result = {
            let mut prompter = Prompter::new(Cursor::new(answers.as_bytes()), &mut output);
            run(cli, &Settings::default(), &mut prompter)
        };
        (result, String::from_utf8(output).expect("utf8 output"))
    }

    fn temp_out_dir(label: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "contactgen_cli_{label}_{}",
            uuid::Uuid::new_v4()
        ));
        std::fs::create_dir_all(&dir).expect("create temp out dir");
        dir
    }

    #[test]
    fn list_variants_prints_each_layout() {
        let (result, output) = run_with(&["--list-variants"], "");
        assert!(result.is_ok());
        assert_eq!(output, "simple (7 columns)\nextended (61 columns)\n");
    }

    #[test]
    fn flags_skip_prompts_and_write_csv() {
        let dir = temp_out_dir("flags");
        let path = dir.join("out.csv");
        let out = path.display().to_string();
        let report = dir.join("report.json").display().to_string();

        let (result, output) = run_with(
            &[
                "--rows", "3", "--email", "a@b.com", "--out", &out, "--variant", "simple",
                "--seed", "1", "--report", &report,
            ],
            "",
        );
        assert!(result.is_ok(), "{result:?}");
        assert!(!output.contains("Number of rows"));
        assert!(output.contains("Finish writing csv file"));
        assert!(output.contains("(3 rows, seed 1)"));

        let contents = std::fs::read_to_string(&path).expect("read csv");
        assert_eq!(contents.lines().count(), 4);
        assert!(contents.contains("a+GoToDev-2@b.com"));
        assert!(Path::new(&report).exists());
    }

    #[test]
    fn prompts_fill_missing_inputs() {
        let dir = temp_out_dir("prompts");
        let out = dir.join("prompted.csv").display().to_string();

        let (result, output) = run_with(&["--out", &out], "2\na@b.com\nextended\n");
        assert!(result.is_ok(), "{result:?}");
        assert!(output.contains("Number of rows"));
        assert!(!output.contains("Output file name"));

        let contents = std::fs::read_to_string(&out).expect("read csv");
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.starts_with("First Name,Middle Name,Last Name"));
    }

    #[test]
    fn invalid_email_fails_before_writing() {
        let dir = temp_out_dir("invalid");
        let out = dir.join("never.csv");
        let out_arg = out.display().to_string();

        let (result, _) = run_with(
            &["--rows", "1", "--email", "nope", "--out", &out_arg, "--variant", "simple"],
            "",
        );
        assert!(matches!(result, Err(CliError::Input(CoreError::InvalidEmail(_)))));
        assert!(!out.exists());
    }

    #[test]
    fn write_failure_keeps_cause_and_exits_nonzero() {
        let dir = temp_out_dir("blocked");
        let blocker = dir.join("blocker");
        std::fs::write(&blocker, "not a directory").expect("create blocker file");
        let out = blocker.join("out.csv").display().to_string();

        let (result, _) = run_with(
            &["--rows", "1", "--email", "a@b.com", "--out", &out, "--variant", "simple"],
            "",
        );
        assert!(matches!(result, Err(CliError::Generation(GenerationError::Io(_)))));

        let mut stderr = Vec::new();
        let status = exit_status(result, &mut stderr);
        let message = String::from_utf8(stderr).expect("utf8 stderr");
        assert_eq!(status, 1);
        assert!(message.starts_with("error writing csv file: io error: "));
        assert_eq!(message.lines().count(), 1);
    }

    #[test]
    fn success_exits_zero_silently() {
        let mut stderr = Vec::new();
        assert_eq!(exit_status(Ok(()), &mut stderr), 0);
        assert!(stderr.is_empty());
    }
}
