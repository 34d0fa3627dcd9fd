//! Optional strict checks over submitted responses.
//!
//! Scoring ignores anything it does not recognise. Callers that want to reject
//! such input run [`validate_responses`] first.

use std::str::FromStr;

use pathway_core::{Question, Responses};
use serde::Serialize;
use thiserror::Error;

use crate::QuizConfig;

/// A response the quiz configuration does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ResponseIssue {
    /// The question identifier is not one of the fixed questions.
    #[error("unknown question '{question}'")]
    UnknownQuestion {
        /// Identifier as submitted.
        question: String,
    },
    /// The answer is not configured for a scored question.
    #[error("unknown answer '{answer}' for question {question}")]
    UnknownAnswer {
        /// The scored question.
        question: Question,
        /// Answer as submitted.
        answer: String,
    },
    /// The `stage-level` answer is not one of the configured stage levels.
    #[error("unknown stage level '{answer}'")]
    UnknownStageLevel {
        /// Answer as submitted.
        answer: String,
    },
}

/// Report every response the configuration does not recognise.
///
/// An empty vector means scoring will use every answer. Stage levels are only
/// checked when the configuration lists them.
///
/// # Examples
/// ```
/// use pathway_core::{Question, Responses};
/// use pathway_scorer::{QuizConfig, ResponseIssue, validate_responses};
///
/// let config = QuizConfig::reference();
/// let mut responses = Responses::new().with_answer(Question::Motivation, "stage-energy");
/// assert!(validate_responses(&config, &responses).is_empty());
///
/// responses.insert_raw("colour", "blue");
/// assert_eq!(
///     validate_responses(&config, &responses),
///     vec![ResponseIssue::UnknownQuestion { question: "colour".to_owned() }],
/// );
/// ```
#[must_use]
pub fn validate_responses(config: &QuizConfig, responses: &Responses) -> Vec<ResponseIssue> {
    responses
        .iter()
        .filter_map(|(id, answer)| check_answer(config, id, answer))
        .collect()
}

fn check_answer(config: &QuizConfig, id: &str, answer: &str) -> Option<ResponseIssue> {
    let Ok(question) = Question::from_str(id) else {
        return Some(ResponseIssue::UnknownQuestion {
            question: id.to_owned(),
        });
    };
    if !question.is_scored() {
        let levels = config.stage_levels();
        let known = levels.is_empty() || levels.iter().any(|level| level == answer);
        return (!known).then(|| ResponseIssue::UnknownStageLevel {
            answer: answer.to_owned(),
        });
    }
    let known = config
        .question(question)
        .is_some_and(|entry| entry.contribution(answer).is_some());
    (!known).then(|| ResponseIssue::UnknownAnswer {
        question,
        answer: answer.to_owned(),
    })
}
