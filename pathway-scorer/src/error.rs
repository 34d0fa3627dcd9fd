//! Error types raised while loading a quiz configuration.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8PathBuf;
use pathway_core::{Path, Question};
use thiserror::Error;

/// Errors raised while parsing or validating a [`QuizConfig`](crate::QuizConfig).
#[derive(Debug, Error)]
pub enum QuizConfigError {
    /// Reading the configuration file failed.
    #[error("failed to read quiz configuration at {path}")]
    Read {
        /// Requested configuration path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: io::Error,
    },
    /// The configuration document was not valid JSON for the expected shape.
    #[error("failed to parse quiz configuration")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// The document parsed but failed one or more validation rules.
    #[error("quiz configuration is invalid: {}", join_errors(.errors))]
    Invalid {
        /// Every problem found, in discovery order.
        errors: Vec<ConfigError>,
    },
}

impl QuizConfigError {
    /// Return the validation problems, or an empty slice for parse failures.
    #[must_use]
    pub fn validation_errors(&self) -> &[ConfigError] {
        match self {
            Self::Read { .. } | Self::Parse { .. } => &[],
            Self::Invalid { errors } => errors,
        }
    }
}

fn join_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A single validation rule broken by a quiz configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A question identifier is not one of the fixed questions.
    #[error("unknown question '{question}'")]
    UnknownQuestion {
        /// Identifier found in the document.
        question: String,
    },
    /// `stage-level` was given a weight or matrix entry.
    #[error("question {question} is not scored and cannot carry weights or contributions")]
    UnscoredQuestion {
        /// The unscored question.
        question: Question,
    },
    /// A scored question has no answers in the fuzzy matrix.
    #[error("question {question} has no answers in the fuzzy matrix")]
    EmptyAnswers {
        /// The question lacking answers.
        question: Question,
    },
    /// A question weight is negative, above one, or not finite.
    #[error("weight {weight} for question {question} must be within 0.0..=1.0")]
    WeightOutOfRange {
        /// Question carrying the weight.
        question: Question,
        /// Offending weight.
        weight: f64,
    },
    /// A matrix entry names a path outside the canonical set.
    #[error("answer '{answer}' of question {question} references unknown path '{path}'")]
    UnknownPath {
        /// Question owning the answer.
        question: Question,
        /// Answer identifier.
        answer: String,
        /// Unrecognised path identifier.
        path: String,
    },
    /// A matrix entry omits one of the canonical paths.
    #[error("answer '{answer}' of question {question} has no contribution for {path}")]
    MissingContribution {
        /// Question owning the answer.
        question: Question,
        /// Answer identifier.
        answer: String,
        /// Path without a contribution.
        path: Path,
    },
    /// A contribution is negative, above one, or not finite.
    #[error(
        "contribution {value} of answer '{answer}' of question {question} for {path} must be within 0.0..=1.0"
    )]
    ContributionOutOfRange {
        /// Question owning the answer.
        question: Question,
        /// Answer identifier.
        answer: String,
        /// Path receiving the contribution.
        path: Path,
        /// Offending value.
        value: f64,
    },
    /// The display cap is not within `(0, 100]`.
    #[error("display top cap {value} must be greater than 0 and at most 100")]
    DisplayCapOutOfRange {
        /// Offending cap.
        value: f64,
    },
    /// A threshold is not within `0..=100`.
    #[error("threshold {name} = {value} must be within 0..=100")]
    ThresholdOutOfRange {
        /// Threshold name as written in the document.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
    /// The Strategic Secondary threshold exceeds the Core Focus threshold.
    #[error(
        "strategicSecondary threshold {strategic_secondary} must not exceed coreFocus threshold {core_focus}"
    )]
    ThresholdOrder {
        /// Core Focus threshold.
        core_focus: f64,
        /// Strategic Secondary threshold.
        strategic_secondary: f64,
    },
}
