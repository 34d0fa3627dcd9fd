//! Labels attached to scored paths.
//!
//! Tiers, blend types and recommendation labels serialise to the
//! human-readable strings the results page and CRM display verbatim.

use serde::{Deserialize, Serialize};

/// Classification of a single path.
///
/// # Examples
/// ```
/// use pathway_core::Tier;
///
/// assert_eq!(Tier::CoreFocus.label(), "Core Focus");
/// assert_eq!(Tier::Noise.to_string(), "Noise");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    /// The single winning path.
    #[serde(rename = "Core Focus")]
    CoreFocus,
    /// A meaningful secondary affinity.
    #[serde(rename = "Strategic Secondary")]
    StrategicSecondary,
    /// Too weak to act on.
    #[serde(rename = "Noise")]
    Noise,
}

impl Tier {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CoreFocus => "Core Focus",
            Self::StrategicSecondary => "Strategic Secondary",
            Self::Noise => "Noise",
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// How concentrated the top two paths are relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlendType {
    /// The top two paths are within the hybrid gap of each other.
    #[serde(rename = "Hybrid Multi-Creator")]
    HybridMultiCreator,
    /// A clear leader with a meaningful secondary path.
    #[serde(rename = "Blend 70/30")]
    Blend7030,
    /// One path dominates with no meaningful secondary.
    #[serde(rename = "Focused")]
    Focused,
}

impl BlendType {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::HybridMultiCreator => "Hybrid Multi-Creator",
            Self::Blend7030 => "Blend 70/30",
            Self::Focused => "Focused",
        }
    }
}

impl std::fmt::Display for BlendType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label carried by a [`Recommendation`](crate::Recommendation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationLabel {
    /// The recommended path holds the Core Focus tier.
    #[serde(rename = "Core Focus")]
    CoreFocus,
    /// Fallback used when no path holds Core Focus.
    #[serde(rename = "Recommended Focus")]
    RecommendedFocus,
}

impl RecommendationLabel {
    /// Return the display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CoreFocus => "Core Focus",
            Self::RecommendedFocus => "Recommended Focus",
        }
    }
}

impl std::fmt::Display for RecommendationLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
