//! A value for every [`Path`].
//!
//! `PathMap` stores one field per path so that lookups are total: there is no
//! way to build a map with a missing entry. It serialises as a JSON object
//! keyed by path identifier.

use serde::{Deserialize, Serialize};

use crate::Path;

/// One `T` per creator path.
///
/// # Examples
/// ```
/// use pathway_core::{Path, PathMap};
///
/// let lengths = PathMap::from_fn(|path| path.as_str().len());
/// assert_eq!(*lengths.get(Path::CreativeArtist), 15);
/// assert_eq!(lengths.iter().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PathMap<T> {
    /// Value for [`Path::TouringPerformer`].
    pub touring_performer: T,
    /// Value for [`Path::CreativeArtist`].
    pub creative_artist: T,
    /// Value for [`Path::WriterProducer`].
    pub writer_producer: T,
}

impl<T> PathMap<T> {
    /// Build a map by evaluating `f` for each path in canonical order.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(Path) -> T,
    {
        Self {
            touring_performer: f(Path::TouringPerformer),
            creative_artist: f(Path::CreativeArtist),
            writer_producer: f(Path::WriterProducer),
        }
    }

    /// Borrow the value for `path`.
    #[must_use]
    pub const fn get(&self, path: Path) -> &T {
        match path {
            Path::TouringPerformer => &self.touring_performer,
            Path::CreativeArtist => &self.creative_artist,
            Path::WriterProducer => &self.writer_producer,
        }
    }

    /// Mutably borrow the value for `path`.
    pub const fn get_mut(&mut self, path: Path) -> &mut T {
        match path {
            Path::TouringPerformer => &mut self.touring_performer,
            Path::CreativeArtist => &mut self.creative_artist,
            Path::WriterProducer => &mut self.writer_producer,
        }
    }

    /// Replace the value for `path`.
    pub fn set(&mut self, path: Path, value: T) {
        *self.get_mut(path) = value;
    }

    /// Iterate `(path, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Path, &T)> + '_ {
        Path::ALL.into_iter().map(move |path| (path, self.get(path)))
    }

    /// Transform every value, keeping the path association.
    pub fn map<U, F>(&self, mut f: F) -> PathMap<U>
    where
        F: FnMut(Path, &T) -> U,
    {
        PathMap::from_fn(|path| f(path, self.get(path)))
    }
}

impl<T: Copy> PathMap<T> {
    /// Build a map holding `value` for every path.
    #[must_use]
    pub const fn splat(value: T) -> Self {
        Self {
            touring_performer: value,
            creative_artist: value,
            writer_producer: value,
        }
    }
}

impl PathMap<f64> {
    /// Return the path holding the largest value.
    ///
    /// Ties resolve to the path that comes first in canonical order.
    ///
    /// # Examples
    /// ```
    /// use pathway_core::{Path, PathMap};
    ///
    /// let tied = PathMap::splat(0.0);
    /// assert_eq!(tied.argmax(), Path::TouringPerformer);
    ///
    /// let mut values = PathMap::splat(10.0);
    /// values.set(Path::WriterProducer, 40.0);
    /// assert_eq!(values.argmax(), Path::WriterProducer);
    /// ```
    #[must_use]
    pub fn argmax(&self) -> Path {
        let mut best = Path::TouringPerformer;
        for (path, value) in self.iter() {
            if *value > *self.get(best) {
                best = path;
            }
        }
        best
    }

    /// Return `(path, value)` pairs sorted by descending value.
    ///
    /// The sort is stable, so tied values keep canonical path order.
    #[must_use]
    pub fn ranked(&self) -> [(Path, f64); 3] {
        let mut ranked = Path::ALL.map(|path| (path, *self.get(path)));
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
