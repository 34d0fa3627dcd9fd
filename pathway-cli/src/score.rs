//! Score command implementation for the pathway CLI.

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use pathway_core::{Responses, ScoreResult};
use pathway_scorer::{PathwayScorer, QuestionContribution, validate_responses};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_OUTPUT, ARG_QUIZ_CONFIG, ARG_SCORE_RESPONSES, CliError, ENV_SCORE_RESPONSES, emit_json,
    load_quiz_config, require_existing,
};

/// CLI arguments for the `score` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    name = "score",
    long_about = "Score a JSON object mapping question identifiers to answer \
                 identifiers. Unknown questions and answers are ignored \
                 unless --strict is given.",
    about = "Score quiz responses"
)]
#[ortho_config(prefix = "PATHWAY")]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file containing the responses.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) responses: Option<Utf8PathBuf>,
    /// Path to a JSON quiz configuration replacing the reference quiz.
    #[arg(long = ARG_QUIZ_CONFIG, value_name = "path")]
    #[serde(default)]
    pub(crate) quiz_config: Option<Utf8PathBuf>,
    /// Write the result to this file instead of stdout.
    #[arg(long = ARG_OUTPUT, value_name = "path")]
    #[serde(default)]
    pub(crate) output: Option<Utf8PathBuf>,
    /// Fail when any response is not recognised by the quiz.
    #[arg(long)]
    #[serde(default)]
    pub(crate) strict: bool,
    /// Include the per-question contributions alongside the result.
    #[arg(long)]
    #[serde(default)]
    pub(crate) explain: bool,
}

impl ScoreArgs {
    pub(crate) fn into_config(self) -> Result<ScoreConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ScoreConfig::try_from(merged)
    }
}

/// Resolved `score` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ScoreConfig {
    pub(crate) responses: Utf8PathBuf,
    pub(crate) quiz_config: Option<Utf8PathBuf>,
    pub(crate) output: Option<Utf8PathBuf>,
    pub(crate) strict: bool,
    pub(crate) explain: bool,
}

impl ScoreConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.responses, ARG_SCORE_RESPONSES)?;
        if let Some(path) = &self.quiz_config {
            require_existing(path, ARG_QUIZ_CONFIG)?;
        }
        Ok(())
    }
}

impl TryFrom<ScoreArgs> for ScoreConfig {
    type Error = CliError;

    fn try_from(args: ScoreArgs) -> Result<Self, Self::Error> {
        let responses = args.responses.ok_or(CliError::MissingArgument {
            field: ARG_SCORE_RESPONSES,
            env: ENV_SCORE_RESPONSES,
        })?;
        Ok(Self {
            responses,
            quiz_config: args.quiz_config,
            output: args.output,
            strict: args.strict,
            explain: args.explain,
        })
    }
}

/// A score result together with the answers that produced it.
#[derive(Debug, Serialize)]
pub(crate) struct ScoreReport {
    pub(crate) result: ScoreResult,
    pub(crate) breakdown: Vec<QuestionContribution>,
}

pub(crate) fn run_score(args: ScoreArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    execute_score(&config, writer)
}

pub(crate) fn execute_score(config: &ScoreConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    let scorer = PathwayScorer::new(load_quiz_config(config.quiz_config.as_deref())?);
    let responses = load_responses(&config.responses)?;
    check_responses(&scorer, &responses, config)?;

    let result = scorer.score_user(&responses);
    log::info!(
        "recommended {} at {:.1}% ({})",
        result.recommendation.path,
        result.recommendation.confidence,
        result.blend_type
    );
    if config.explain {
        let report = ScoreReport {
            breakdown: scorer.breakdown(&responses),
            result,
        };
        emit_json(&report, config.output.as_ref(), writer)
    } else {
        emit_json(&result, config.output.as_ref(), writer)
    }
}

fn check_responses(
    scorer: &PathwayScorer,
    responses: &Responses,
    config: &ScoreConfig,
) -> Result<(), CliError> {
    let issues = validate_responses(scorer.config(), responses);
    if issues.is_empty() {
        return Ok(());
    }
    if config.strict {
        return Err(CliError::UnrecognisedResponses {
            path: config.responses.clone(),
            issues,
        });
    }
    for issue in &issues {
        log::warn!("ignoring response: {issue}");
    }
    Ok(())
}

/// Loads a JSON object of responses from disk.
pub(crate) fn load_responses(path: &Utf8Path) -> Result<Responses, CliError> {
    let json = pathway_fs::read_to_string(path).map_err(|source| CliError::ReadResponses {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| CliError::ParseResponses {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<ScoreConfig, CliError> {
    let merged = ScoreArgs::merge_from_layers(layers).map_err(CliError::from)?;
    ScoreConfig::try_from(merged)
}
