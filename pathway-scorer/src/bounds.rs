//! Attainable score range per path.
//!
//! Bounds depend only on the quiz configuration, so the scorer computes them
//! once at construction and reuses them for every request.

use pathway_core::{Path, PathMap};
use serde::Serialize;

use crate::QuizConfig;

/// Highest and lowest raw score each path can reach.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PathBounds {
    /// Sum over weighted questions of `weight * max contribution`.
    pub max: PathMap<f64>,
    /// Sum over weighted questions of `weight * min contribution`.
    pub min: PathMap<f64>,
}

impl PathBounds {
    /// Derive bounds from `config`.
    ///
    /// Questions with a zero weight are skipped. Accumulation follows
    /// canonical question order, matching raw score accumulation so that a
    /// user picking every maximising answer scores exactly `max`.
    ///
    /// # Examples
    /// ```
    /// use pathway_core::Path;
    /// use pathway_scorer::{PathBounds, QuizConfig};
    ///
    /// let bounds = PathBounds::compute(&QuizConfig::reference());
    /// assert!((bounds.max.get(Path::TouringPerformer) - 1.0).abs() < 1e-9);
    /// assert!((bounds.min.get(Path::CreativeArtist) - 0.3).abs() < 1e-9);
    /// ```
    #[must_use]
    #[expect(
        clippy::float_arithmetic,
        reason = "bounds are weighted sums of contributions"
    )]
    pub fn compute(config: &QuizConfig) -> Self {
        let mut max = PathMap::splat(0.0);
        let mut min = PathMap::splat(0.0);
        for (_, question) in config.weighted_questions() {
            let weight = question.weight();
            for path in Path::ALL {
                let Some((hi, lo)) = extremes(question.answers().map(|(_, row)| *row.get(path)))
                else {
                    continue;
                };
                *max.get_mut(path) += weight * hi;
                *min.get_mut(path) += weight * lo;
            }
        }
        Self { max, min }
    }

    /// Return the divisor for absolute percentages: `max`, or `1.0` when the
    /// path cannot score at all.
    #[must_use]
    pub const fn max_denominator(&self, path: Path) -> f64 {
        non_zero_or_one(*self.max.get(path))
    }

    /// Return the divisor for floor-adjusted percentages: `max - min`, or
    /// `1.0` when the range is empty.
    #[must_use]
    #[expect(clippy::float_arithmetic, reason = "span is the width of the range")]
    pub const fn span_denominator(&self, path: Path) -> f64 {
        non_zero_or_one(*self.max.get(path) - *self.min.get(path))
    }
}

fn extremes(mut values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let first = values.next()?;
    Some(values.fold((first, first), |(hi, lo), value| {
        (hi.max(value), lo.min(value))
    }))
}

const fn non_zero_or_one(value: f64) -> f64 {
    if value == 0.0 { 1.0 } else { value }
}
