//! Quiz questions understood by the engine.

use serde::{Deserialize, Serialize};

use crate::ParseIdError;

/// One of the five fixed quiz questions.
///
/// [`Question::StageLevel`] is carried through to the result but never scored.
///
/// # Examples
/// ```
/// use pathway_core::Question;
///
/// assert!(Question::Motivation.is_scored());
/// assert!(!Question::StageLevel.is_scored());
/// assert_eq!(Question::IdealDay.as_str(), "ideal-day");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Question {
    /// What draws the user to music.
    Motivation,
    /// How the user would spend an ideal working day.
    IdealDay,
    /// The picture of success the user aims for.
    SuccessVision,
    /// How the user measures having made it.
    SuccessDefinition,
    /// Current career stage; informational only.
    StageLevel,
}

impl Question {
    /// Every question in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Motivation,
        Self::IdealDay,
        Self::SuccessVision,
        Self::SuccessDefinition,
        Self::StageLevel,
    ];

    /// Return the kebab-case identifier used in responses.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::IdealDay => "ideal-day",
            Self::SuccessVision => "success-vision",
            Self::SuccessDefinition => "success-definition",
            Self::StageLevel => "stage-level",
        }
    }

    /// Report whether answers to this question feed the fuzzy matrix.
    #[must_use]
    pub const fn is_scored(self) -> bool {
        !matches!(self, Self::StageLevel)
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Question {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|question| question.as_str() == s)
            .ok_or_else(|| ParseIdError::new("question", s))
    }
}
