//! Facade crate for the creator pathway scoring engine.
//!
//! This crate re-exports the core domain types together with the reference
//! scorer so that callers depend on a single crate.
//!
//! ```
//! use pathway_engine::{Path, PathwayScorer, Question, Responses, Scorer};
//!
//! let responses = Responses::new()
//!     .with_answer(Question::Motivation, "stage-energy")
//!     .with_answer(Question::IdealDay, "performing");
//! let result = PathwayScorer::reference().score(&responses);
//! assert_eq!(result.recommendation.path, Path::TouringPerformer);
//! ```

#![forbid(unsafe_code)]

pub use pathway_core::{
    BlendType, ParseIdError, Path, PathMap, Question, Recommendation, RecommendationLabel,
    Responses, ScoreResult, Scorer, Tier,
};

pub use pathway_scorer::{
    ConfigError, PathBounds, PathwayScorer, QuestionContribution, QuizConfig, QuizConfigError,
    QuizConfigFile, ResponseIssue, Thresholds, validate_responses,
};

#[cfg(feature = "test-support")]
pub use pathway_core::test_support;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn scorer_is_usable_through_the_trait_object() {
        let scorer: Box<dyn Scorer> = Box::new(PathwayScorer::reference());
        let result = scorer.score(&pathway_core::test_support::pure_writer());
        assert_eq!(result.core_focus(), Some(Path::WriterProducer));
    }
}
