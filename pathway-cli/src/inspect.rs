//! Quiz inspection commands: `bounds` and `config`.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pathway_scorer::{PathwayScorer, QuizConfigFile};
use serde::{Deserialize, Serialize};

use crate::{ARG_OUTPUT, ARG_QUIZ_CONFIG, CliError, emit_json, load_quiz_config};

/// CLI arguments for the `bounds` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "bounds",
    long_about = "Print the maximum and minimum raw score each path can \
                 reach under the active quiz configuration. These bounds \
                 are the denominators used for percentage normalisation.",
    about = "Print per-path score bounds"
)]
#[ortho_config(prefix = "PATHWAY")]
pub(crate) struct BoundsArgs {
    /// Path to a JSON quiz configuration replacing the reference quiz.
    #[arg(long = ARG_QUIZ_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz_config: Option<Utf8PathBuf>,
    /// Write the bounds to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

/// CLI arguments for the `config` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "config",
    long_about = "Validate a quiz configuration and print it in its JSON \
                 file form. Without --quiz-config the built-in reference \
                 quiz is printed, which is a convenient starting point for \
                 a custom quiz.",
    about = "Validate and print a quiz configuration"
)]
#[ortho_config(prefix = "PATHWAY")]
pub(crate) struct ConfigArgs {
    /// Path to a JSON quiz configuration replacing the reference quiz.
    #[arg(long = ARG_QUIZ_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz_config: Option<Utf8PathBuf>,
    /// Write the configuration to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
}

pub(crate) fn run_bounds(args: BoundsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_bounds(&merged, writer)
}

pub(crate) fn execute_bounds(args: &BoundsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let scorer = PathwayScorer::new(load_quiz_config(args.quiz_config.as_deref())?);
    emit_json(scorer.bounds(), args.output.as_ref(), writer)
}

pub(crate) fn run_config(args: ConfigArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let merged = args.load_and_merge().map_err(CliError::Configuration)?;
    execute_config(&merged, writer)
}

pub(crate) fn execute_config(args: &ConfigArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = load_quiz_config(args.quiz_config.as_deref())?;
    emit_json(&QuizConfigFile::from(&config), args.output.as_ref(), writer)
}
