//! The scoring pipeline: raw accumulation, normalisation, classification and
//! recommendation.

use std::str::FromStr;

use pathway_core::{PathMap, Question, Responses, ScoreResult, Scorer};
use serde::Serialize;

use crate::classify::{
    blend_from_abs, classify_levels, derive_recommendation, enforce_single_core_focus,
};
use crate::normalise::{absolute_pct, display_pct, floor_adjusted_pct};
use crate::{PathBounds, QuizConfig};

/// Weighted contribution of one answered question.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionContribution {
    /// The scored question.
    pub question: Question,
    /// Answer identifier submitted for it.
    pub answer: String,
    /// Weight of the question.
    pub weight: f64,
    /// `weight * matrix contribution` per path.
    pub contributions: PathMap<f64>,
}

/// Scores quiz responses against a validated [`QuizConfig`].
///
/// Path bounds are computed once in the constructor. The scorer holds no
/// mutable state, so a single instance can be shared across threads.
///
/// # Examples
/// ```
/// use pathway_core::{Path, Question, Responses, Tier};
/// use pathway_scorer::PathwayScorer;
///
/// let scorer = PathwayScorer::reference();
/// let responses = Responses::new()
///     .with_answer(Question::Motivation, "stage-energy")
///     .with_answer(Question::IdealDay, "performing")
///     .with_answer(Question::SuccessVision, "touring-artist")
///     .with_answer(Question::SuccessDefinition, "live-performer")
///     .with_answer(Question::StageLevel, "planning");
///
/// let result = scorer.score_user(&responses);
/// assert_eq!(result.recommendation.path, Path::TouringPerformer);
/// assert_eq!(*result.levels.get(Path::TouringPerformer), Tier::CoreFocus);
/// assert_eq!(result.stage_level.as_deref(), Some("planning"));
/// ```
#[derive(Debug, Clone)]
pub struct PathwayScorer {
    config: QuizConfig,
    bounds: PathBounds,
}

impl PathwayScorer {
    /// Build a scorer for `config`, computing its path bounds.
    #[must_use]
    pub fn new(config: QuizConfig) -> Self {
        let bounds = PathBounds::compute(&config);
        Self { config, bounds }
    }

    /// Build a scorer for the reference quiz.
    #[must_use]
    pub fn reference() -> Self {
        Self::new(QuizConfig::reference())
    }

    /// Borrow the configuration the scorer was built with.
    #[must_use]
    pub const fn config(&self) -> &QuizConfig {
        &self.config
    }

    /// Borrow the precomputed path bounds.
    #[must_use]
    pub const fn bounds(&self) -> &PathBounds {
        &self.bounds
    }

    /// List the weighted contribution of every scored answer, in canonical
    /// question order.
    ///
    /// Summing the contributions in order reproduces
    /// [`raw_scores`](Self::raw_scores) exactly.
    #[must_use]
    pub fn breakdown(&self, responses: &Responses) -> Vec<QuestionContribution> {
        self.scored_answers(responses)
            .map(|answer| QuestionContribution {
                question: answer.question,
                answer: answer.answer.to_owned(),
                weight: answer.weight,
                contributions: answer.weighted(),
            })
            .collect()
    }

    /// Accumulate the weighted raw score per path.
    ///
    /// Unknown questions, unknown answers, zero-weight questions and
    /// `stage-level` contribute nothing.
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "raw scores are weighted sums"
    )]
    pub fn raw_scores(&self, responses: &Responses) -> PathMap<f64> {
        if log::log_enabled!(log::Level::Debug) {
            for (id, _) in responses.iter() {
                if Question::from_str(id).is_err() {
                    log::debug!("ignoring answer to unknown question '{id}'");
                }
            }
        }
        let mut raw = PathMap::splat(0.0);
        for answer in self.scored_answers(responses) {
            for (path, value) in answer.weighted().iter() {
                *raw.get_mut(path) += *value;
            }
        }
        raw
    }

    /// Run the full pipeline for `responses`.
    ///
    /// The result always carries an entry for every path and exactly one
    /// Core Focus. Identical input yields identical output.
    #[must_use]
    pub fn score_user(&self, responses: &Responses) -> ScoreResult {
        let raw = self.raw_scores(responses);
        let abs_pct = absolute_pct(&raw, &self.bounds);
        let floor_pct = floor_adjusted_pct(&raw, &self.bounds);
        let display = display_pct(&floor_pct, self.config.display_top_cap());

        let thresholds = self.config.thresholds();
        let correction =
            enforce_single_core_focus(classify_levels(&abs_pct, thresholds), &abs_pct, thresholds);
        let blend_type = blend_from_abs(&abs_pct, thresholds);
        let recommendation = derive_recommendation(&abs_pct, &correction.levels);

        ScoreResult {
            raw,
            abs_pct,
            display_pct: display,
            levels: correction.levels,
            blend_type,
            recommendation,
            stage_level: responses.stage_level().map(str::to_owned),
        }
    }

    fn scored_answers<'a>(
        &'a self,
        responses: &'a Responses,
    ) -> impl Iterator<Item = ScoredAnswer<'a>> + 'a {
        self.config
            .weighted_questions()
            .filter_map(move |(question, entry)| {
                let answer = responses.answer(question)?;
                let Some(row) = entry.contribution(answer) else {
                    log::debug!("ignoring unknown answer '{answer}' for {question}");
                    return None;
                };
                Some(ScoredAnswer {
                    question,
                    answer,
                    weight: entry.weight(),
                    row,
                })
            })
    }
}

impl Default for PathwayScorer {
    fn default() -> Self {
        Self::reference()
    }
}

impl Scorer for PathwayScorer {
    fn score(&self, responses: &Responses) -> ScoreResult {
        self.score_user(responses)
    }
}

struct ScoredAnswer<'a> {
    question: Question,
    answer: &'a str,
    weight: f64,
    row: &'a PathMap<f64>,
}

impl ScoredAnswer<'_> {
    #[expect(
        clippy::float_arithmetic,
        reason = "contributions are scaled by the question weight"
    )]
    fn weighted(&self) -> PathMap<f64> {
        self.row.map(|_, value| self.weight * value)
    }
}
