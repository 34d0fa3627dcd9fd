//! Core domain types for the creator pathway engine.
//!
//! The closed vocabularies ([`Path`], [`Question`], [`Tier`], [`BlendType`])
//! give compile-time safety to lookups, while [`Responses`] keeps the raw
//! strings submitted by the quiz so that unknown input can be ignored rather
//! than rejected.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use thiserror::Error;

pub mod path;
pub mod path_map;
pub mod question;
pub mod responses;
pub mod result;
pub mod scorer;
pub mod tier;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use path::Path;
pub use path_map::PathMap;
pub use question::Question;
pub use responses::Responses;
pub use result::{Recommendation, ScoreResult};
pub use scorer::Scorer;
pub use tier::{BlendType, RecommendationLabel, Tier};

/// Error returned when parsing an unknown identifier.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}'")]
pub struct ParseIdError {
    kind: &'static str,
    value: String,
}

impl ParseIdError {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Return the identifier that failed to parse.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
