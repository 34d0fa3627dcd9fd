//! Creator pathways scored by the engine.
//!
//! The set is closed and ordered. [`Path::ALL`] fixes the canonical order that
//! every tie-break in the engine falls back to.
//!
//! # Examples
//! ```
//! use pathway_core::Path;
//!
//! assert_eq!(Path::TouringPerformer.as_str(), "touring-performer");
//! assert_eq!(Path::WriterProducer.to_string(), "writer-producer");
//! ```

use serde::{Deserialize, Serialize};

use crate::ParseIdError;

/// One of the three creator archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Path {
    /// Live performance and touring.
    TouringPerformer,
    /// Audience-facing content and artistry.
    CreativeArtist,
    /// Songwriting and studio production.
    WriterProducer,
}

impl Path {
    /// Every path in canonical order.
    pub const ALL: [Self; 3] = [
        Self::TouringPerformer,
        Self::CreativeArtist,
        Self::WriterProducer,
    ];

    /// Return the kebab-case identifier used by configuration and responses.
    ///
    /// # Examples
    /// ```
    /// use pathway_core::Path;
    ///
    /// assert_eq!(Path::CreativeArtist.as_str(), "creative-artist");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TouringPerformer => "touring-performer",
            Self::CreativeArtist => "creative-artist",
            Self::WriterProducer => "writer-producer",
        }
    }
}

impl std::fmt::Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Path {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|path| path.as_str() == s)
            .ok_or_else(|| ParseIdError::new("path", s))
    }
}
