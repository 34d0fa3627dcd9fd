//! Score quiz responses.
//!
//! The `Scorer` trait turns a user's [`Responses`](crate::Responses) into a
//! fully populated [`ScoreResult`](crate::ScoreResult).

use crate::{Responses, ScoreResult};

/// Derive a pathway result from quiz responses.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so one scorer can
/// serve concurrent requests. The method is infallible: unknown questions and
/// answers are ignored rather than reported, and every path must have an
/// entry in every map of the returned result.
///
/// Implementations must be pure: scoring the same responses twice yields
/// identical results.
///
/// # Examples
///
/// ```rust
/// use pathway_core::{
///     BlendType, Path, PathMap, Recommendation, RecommendationLabel, Responses, ScoreResult,
///     Scorer, Tier,
/// };
///
/// struct AlwaysPerformer;
///
/// impl Scorer for AlwaysPerformer {
///     fn score(&self, responses: &Responses) -> ScoreResult {
///         let mut levels = PathMap::splat(Tier::Noise);
///         levels.set(Path::TouringPerformer, Tier::CoreFocus);
///         ScoreResult {
///             raw: PathMap::splat(0.0),
///             abs_pct: PathMap::splat(0.0),
///             display_pct: PathMap::splat(0),
///             levels,
///             blend_type: BlendType::HybridMultiCreator,
///             recommendation: Recommendation {
///                 path: Path::TouringPerformer,
///                 confidence: 0.0,
///                 label: RecommendationLabel::CoreFocus,
///                 promoted: false,
///             },
///             stage_level: responses.stage_level().map(str::to_owned),
///         }
///     }
/// }
///
/// let result = AlwaysPerformer.score(&Responses::new());
/// assert_eq!(result.core_focus(), Some(Path::TouringPerformer));
/// ```
pub trait Scorer: Send + Sync {
    /// Return the result for `responses`.
    fn score(&self, responses: &Responses) -> ScoreResult;
}
