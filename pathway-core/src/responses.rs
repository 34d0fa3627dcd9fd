//! Quiz answers submitted by a user.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::Question;

/// Answers keyed by question identifier.
///
/// Keys and values are kept as the raw strings the quiz submitted. Unknown
/// questions or answers are not rejected here; the scorer ignores them.
///
/// # Examples
/// ```
/// use pathway_core::{Question, Responses};
///
/// let responses = Responses::new()
///     .with_answer(Question::Motivation, "stage-energy")
///     .with_answer(Question::StageLevel, "planning");
/// assert_eq!(responses.answer(Question::Motivation), Some("stage-energy"));
/// assert_eq!(responses.stage_level(), Some("planning"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Responses {
    answers: BTreeMap<String, String>,
}

impl Responses {
    /// Construct an empty set of responses.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a known question, replacing any previous one.
    pub fn insert(&mut self, question: Question, answer: impl Into<String>) {
        self.answers.insert(question.as_str().to_owned(), answer.into());
    }

    /// Record an answer while returning `self` for chaining.
    #[must_use]
    pub fn with_answer(mut self, question: Question, answer: impl Into<String>) -> Self {
        self.insert(question, answer);
        self
    }

    /// Record an answer under an arbitrary question identifier.
    pub fn insert_raw(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    /// Return the answer submitted for `question`, if any.
    #[must_use]
    pub fn answer(&self, question: Question) -> Option<&str> {
        self.answers.get(question.as_str()).map(String::as_str)
    }

    /// Return the `stage-level` answer, which scoring passes through untouched.
    #[must_use]
    pub fn stage_level(&self) -> Option<&str> {
        self.answer(Question::StageLevel)
    }

    /// Iterate every submitted `(question id, answer id)` pair.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.answers
            .iter()
            .map(|(question, answer)| (question.as_str(), answer.as_str()))
    }

    /// Return the number of submitted answers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Report whether no answers were submitted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Responses
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(question, answer)| (question.into(), answer.into()))
                .collect(),
        }
    }
}
