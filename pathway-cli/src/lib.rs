//! Command-line interface for the creator pathway scoring engine.
//!
//! - `pathway score <responses.json>` scores a set of quiz answers.
//! - `pathway bounds` prints the attainable score range per path.
//! - `pathway config` validates a quiz configuration and prints it.
//!
//! Every subcommand accepts `--quiz-config <path>` to replace the built-in
//! reference quiz. Options layer over configuration files and `PATHWAY_*`
//! environment variables via `ortho_config`.
#![forbid(unsafe_code)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use pathway_scorer::QuizConfig;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod error;
mod inspect;
mod score;

pub use error::CliError;

use inspect::{BoundsArgs, ConfigArgs};
use score::ScoreArgs;

pub(crate) const ARG_SCORE_RESPONSES: &str = "responses";
pub(crate) const ARG_QUIZ_CONFIG: &str = "quiz-config";
pub(crate) const ARG_OUTPUT: &str = "output";
pub(crate) const ENV_SCORE_RESPONSES: &str = "PATHWAY_CMDS_SCORE_RESPONSES";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Run the pathway CLI with the current process arguments and environment.
///
/// # Errors
/// Returns a [`CliError`] when arguments, configuration, input files or
/// output writing fail.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    init_logging(&cli.log_level)?;
    let mut stdout = std::io::stdout().lock();
    match cli.command {
        Command::Score(args) => score::run_score(args, &mut stdout),
        Command::Bounds(args) => inspect::run_bounds(args, &mut stdout),
        Command::Config(args) => inspect::run_config(args, &mut stdout),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "pathway",
    about = "Score creator pathway quiz responses",
    version
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset (e.g. "info", "pathway_scorer=debug").
    #[arg(long, global = true, value_name = "filter", default_value = DEFAULT_LOG_FILTER)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a JSON object of quiz answers.
    Score(ScoreArgs),
    /// Print the attainable raw score range per path.
    Bounds(BoundsArgs),
    /// Validate a quiz configuration and print it.
    Config(ConfigArgs),
}

fn init_logging(level: &str) -> Result<(), CliError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(level).map_err(|source| CliError::LogFilter {
            value: level.to_owned(),
            source,
        })?,
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(CliError::Logging)
}

/// Load the quiz at `path`, or the reference quiz when no path is given.
pub(crate) fn load_quiz_config(path: Option<&Utf8Path>) -> Result<QuizConfig, CliError> {
    match path {
        Some(path) => {
            require_existing(path, ARG_QUIZ_CONFIG)?;
            let config = QuizConfig::from_path(path)?;
            log::info!("using quiz configuration from {path}");
            Ok(config)
        }
        None => Ok(QuizConfig::reference()),
    }
}

/// Check that `path` names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
    match pathway_fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serialise `value` as pretty JSON to `output`, or to `writer` when no
/// output path is given.
pub(crate) fn emit_json<T: Serialize>(
    value: &T,
    output: Option<&Utf8PathBuf>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let mut payload = serde_json::to_string_pretty(value).map_err(CliError::Serialise)?;
    payload.push('\n');
    match output {
        Some(path) => {
            pathway_fs::write_string(path, &payload).map_err(|source| {
                CliError::WriteOutputFile {
                    path: path.clone(),
                    source,
                }
            })?;
            log::info!("wrote output to {path}");
            Ok(())
        }
        None => writer
            .write_all(payload.as_bytes())
            .map_err(CliError::WriteOutput),
    }
}

#[cfg(test)]
mod tests;
