//! Convert raw scores into the three percentage views.
//!
//! - Absolute percentages compare a raw score with the path's attainable
//!   maximum and drive classification.
//! - Floor-adjusted percentages remove the unavoidable minimum so that a path
//!   nobody can avoid scoring on does not look competitive.
//! - Display percentages rescale the floor-adjusted view so the leader shows
//!   the display cap.

use pathway_core::PathMap;

use crate::PathBounds;

/// Express each raw score as a percentage of its path's maximum.
///
/// A path whose maximum is zero divides by one, so it reports `0.0`.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "percentages are ratios scaled to 100"
)]
pub fn absolute_pct(raw: &PathMap<f64>, bounds: &PathBounds) -> PathMap<f64> {
    raw.map(|path, value| value / bounds.max_denominator(path) * 100.0)
}

/// Express each raw score as a percentage of its path's attainable range.
#[expect(
    clippy::float_arithmetic,
    reason = "percentages are ratios scaled to 100"
)]
pub(crate) fn floor_adjusted_pct(raw: &PathMap<f64>, bounds: &PathBounds) -> PathMap<f64> {
    raw.map(|path, value| {
        let above_floor = (value - bounds.min.get(path)).max(0.0);
        above_floor / bounds.span_denominator(path) * 100.0
    })
}

/// Scale floor-adjusted percentages so the largest becomes `cap`.
///
/// Values are rounded half away from zero and clamped to `0..=100`. When
/// every floor-adjusted value is zero the scale is zero and all paths
/// display `0`.
///
/// # Examples
/// ```
/// use pathway_core::{Path, PathMap};
/// use pathway_scorer::display_pct;
///
/// let floor = PathMap {
///     touring_performer: 50.0,
///     creative_artist: 25.0,
///     writer_producer: 0.0,
/// };
/// let display = display_pct(&floor, 97.0);
/// assert_eq!(*display.get(Path::TouringPerformer), 97);
/// assert_eq!(*display.get(Path::CreativeArtist), 49);
/// assert_eq!(*display.get(Path::WriterProducer), 0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "display values rescale percentages"
)]
pub fn display_pct(floor: &PathMap<f64>, cap: f64) -> PathMap<u8> {
    let top = *floor.get(floor.argmax());
    if top <= 0.0 {
        return PathMap::splat(0);
    }
    floor.map(|_, value| to_display(value * cap / top))
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "value is rounded and clamped to 0..=100 before the cast"
)]
fn to_display(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

