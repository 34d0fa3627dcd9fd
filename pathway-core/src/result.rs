//! Output of a scoring call.
//!
//! A [`ScoreResult`] is a snapshot: callers render or persist it as-is and
//! never recompute its fields. Field names serialise in camelCase to match
//! the JSON stored alongside lead profiles.

use serde::{Deserialize, Serialize};

use crate::{BlendType, Path, PathMap, RecommendationLabel, Tier};

/// The single path the user is pointed towards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Recommended path.
    pub path: Path,
    /// Absolute percentage of the recommended path.
    pub confidence: f64,
    /// Label shown alongside the recommendation.
    pub label: RecommendationLabel,
    /// Whether the recommendation was promoted without holding Core Focus.
    pub promoted: bool,
}

/// Everything the engine derives from one set of responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Accumulated weighted score per path.
    pub raw: PathMap<f64>,
    /// Raw score as a percentage of each path's attainable maximum.
    pub abs_pct: PathMap<f64>,
    /// Integer percentage scaled so the leading path shows the display cap.
    pub display_pct: PathMap<u8>,
    /// Tier per path; exactly one path holds [`Tier::CoreFocus`].
    pub levels: PathMap<Tier>,
    /// Concentration of the top two paths.
    pub blend_type: BlendType,
    /// The chosen path.
    pub recommendation: Recommendation,
    /// Unscored `stage-level` answer, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage_level: Option<String>,
}

impl ScoreResult {
    /// Return the path holding [`Tier::CoreFocus`], if any.
    ///
    /// Results produced by the engine always have exactly one.
    #[must_use]
    pub fn core_focus(&self) -> Option<Path> {
        self.levels
            .iter()
            .find(|(_, tier)| **tier == Tier::CoreFocus)
            .map(|(path, _)| path)
    }
}
