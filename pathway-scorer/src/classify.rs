//! Tier, blend and recommendation rules applied to absolute percentages.

use pathway_core::{BlendType, Path, PathMap, Recommendation, RecommendationLabel, Tier};

use crate::Thresholds;

/// Classify one absolute percentage.
///
/// Both thresholds are inclusive. With `skip_core_focus` set the Core Focus
/// branch is never taken, which is how demoted paths are re-classified.
///
/// # Examples
/// ```
/// use pathway_core::Tier;
/// use pathway_scorer::{Thresholds, level_from_pct};
///
/// let thresholds = Thresholds::default();
/// assert_eq!(level_from_pct(60.0, false, &thresholds), Tier::CoreFocus);
/// assert_eq!(level_from_pct(60.0, true, &thresholds), Tier::StrategicSecondary);
/// assert_eq!(level_from_pct(34.9, false, &thresholds), Tier::Noise);
/// ```
#[must_use]
pub const fn level_from_pct(pct: f64, skip_core_focus: bool, thresholds: &Thresholds) -> Tier {
    if !skip_core_focus && pct >= thresholds.core_focus {
        Tier::CoreFocus
    } else if pct >= thresholds.strategic_secondary {
        Tier::StrategicSecondary
    } else {
        Tier::Noise
    }
}

/// Classify every path independently, without the single-winner rule.
#[must_use]
pub fn classify_levels(abs_pct: &PathMap<f64>, thresholds: &Thresholds) -> PathMap<Tier> {
    abs_pct.map(|_, pct| level_from_pct(*pct, false, thresholds))
}

/// Outcome of [`enforce_single_core_focus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoreFocusCorrection {
    /// Tiers with exactly one Core Focus path.
    pub levels: PathMap<Tier>,
    /// The path holding Core Focus.
    pub winner: Path,
    /// Whether the winner was below the Core Focus threshold and had to be
    /// promoted.
    pub promoted: bool,
}

/// Make the path with the highest absolute percentage the only Core Focus.
///
/// The winner is the first path in canonical order among those tied for the
/// maximum. It is promoted even when below the threshold. Every other path
/// holding Core Focus is re-classified with the Core Focus branch skipped, so
/// it lands in Strategic Secondary or Noise.
///
/// # Examples
/// ```
/// use pathway_core::{Path, PathMap, Tier};
/// use pathway_scorer::{Thresholds, classify_levels, enforce_single_core_focus};
///
/// let thresholds = Thresholds::default();
/// let abs = PathMap {
///     touring_performer: 72.5,
///     creative_artist: 67.0,
///     writer_producer: 17.0,
/// };
/// let corrected = enforce_single_core_focus(classify_levels(&abs, &thresholds), &abs, &thresholds);
/// assert_eq!(corrected.winner, Path::TouringPerformer);
/// assert_eq!(*corrected.levels.get(Path::CreativeArtist), Tier::StrategicSecondary);
/// ```
#[must_use]
pub fn enforce_single_core_focus(
    levels: PathMap<Tier>,
    abs_pct: &PathMap<f64>,
    thresholds: &Thresholds,
) -> CoreFocusCorrection {
    let winner = abs_pct.argmax();
    let promoted = *levels.get(winner) != Tier::CoreFocus;
    let corrected = levels.map(|path, tier| {
        if path == winner {
            Tier::CoreFocus
        } else if *tier == Tier::CoreFocus {
            level_from_pct(*abs_pct.get(path), true, thresholds)
        } else {
            *tier
        }
    });
    if promoted {
        log::debug!(
            "promoted {winner} to Core Focus at {:.2}%",
            abs_pct.get(winner)
        );
    }
    CoreFocusCorrection {
        levels: corrected,
        winner,
        promoted,
    }
}

/// Describe how concentrated the top two absolute percentages are.
///
/// # Examples
/// ```
/// use pathway_core::{BlendType, PathMap};
/// use pathway_scorer::{Thresholds, blend_from_abs};
///
/// let thresholds = Thresholds::default();
/// let close = PathMap { touring_performer: 50.0, creative_artist: 41.0, writer_producer: 0.0 };
/// assert_eq!(blend_from_abs(&close, &thresholds), BlendType::HybridMultiCreator);
/// let clear = PathMap { touring_performer: 50.0, creative_artist: 40.0, writer_producer: 0.0 };
/// assert_eq!(blend_from_abs(&clear, &thresholds), BlendType::Blend7030);
/// ```
#[must_use]
#[expect(clippy::float_arithmetic, reason = "blend compares the top-two gap")]
pub fn blend_from_abs(abs_pct: &PathMap<f64>, thresholds: &Thresholds) -> BlendType {
    let [(_, first), (_, second), _] = abs_pct.ranked();
    if first - second < thresholds.hybrid_gap {
        BlendType::HybridMultiCreator
    } else if second >= thresholds.blend_secondary {
        BlendType::Blend7030
    } else {
        BlendType::Focused
    }
}

/// Pick the recommended path: the leader by absolute percentage.
///
/// When no path holds Core Focus the recommendation is labelled Recommended
/// Focus and marked as promoted. Levels produced by
/// [`enforce_single_core_focus`] always hold one Core Focus, so the engine
/// never takes that branch.
#[must_use]
pub fn derive_recommendation(abs_pct: &PathMap<f64>, levels: &PathMap<Tier>) -> Recommendation {
    let [(path, confidence), ..] = abs_pct.ranked();
    let has_core_focus = levels.iter().any(|(_, tier)| *tier == Tier::CoreFocus);
    if has_core_focus {
        Recommendation {
            path,
            confidence,
            label: RecommendationLabel::CoreFocus,
            promoted: false,
        }
    } else {
        log::warn!("no path holds Core Focus; recommending {path} as Recommended Focus");
        Recommendation {
            path,
            confidence,
            label: RecommendationLabel::RecommendedFocus,
            promoted: true,
        }
    }
}
