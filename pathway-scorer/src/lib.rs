//! Scoring engine for the creator pathway quiz.
//!
//! A [`PathwayScorer`] turns quiz [`Responses`](pathway_core::Responses) into
//! a [`ScoreResult`](pathway_core::ScoreResult) in five steps:
//!
//! 1. accumulate a weighted raw score per path from the fuzzy matrix;
//! 2. normalise it against the path's attainable maximum ([`absolute_pct`]);
//! 3. rescale the floor-adjusted view for display ([`display_pct`]);
//! 4. classify tiers and keep a single Core Focus
//!    ([`enforce_single_core_focus`]);
//! 5. derive the blend type and recommendation.
//!
//! The weights, matrix, display cap and thresholds live in one validated
//! [`QuizConfig`]. [`PathBounds`] are computed from it once, when the scorer
//! is built, and shared read-only by every call.
//!
//! # Examples
//!
//! ```
//! use pathway_core::{BlendType, Path, Question, Responses};
//! use pathway_scorer::PathwayScorer;
//!
//! let scorer = PathwayScorer::reference();
//! let responses = Responses::new()
//!     .with_answer(Question::Motivation, "crafting-songs")
//!     .with_answer(Question::IdealDay, "studio-session");
//! let result = scorer.score_user(&responses);
//! assert_eq!(result.core_focus(), Some(Path::WriterProducer));
//! assert_eq!(*result.display_pct.get(Path::WriterProducer), 97);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod bounds;
mod classify;
mod config;
mod engine;
mod error;
mod normalise;
mod validation;

pub use bounds::PathBounds;
pub use classify::{
    CoreFocusCorrection, blend_from_abs, classify_levels, derive_recommendation,
    enforce_single_core_focus, level_from_pct,
};
pub use config::{DISPLAY_TOP_CAP, QuestionConfig, QuizConfig, QuizConfigFile, Thresholds};
pub use engine::{PathwayScorer, QuestionContribution};
pub use error::{ConfigError, QuizConfigError};
pub use normalise::{absolute_pct, display_pct};
pub use validation::{ResponseIssue, validate_responses};
