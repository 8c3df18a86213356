//! Movie record value type
//!
//! This module provides the immutable `MovieRecord` value that individuals
//! are built from.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// A single movie from the catalog
///
/// Records are immutable once ingested. Missing genre/cast/director values
/// are coerced to empty collections by [`MovieRecord::normalized`]; missing
/// runtime, rating, and release year stay `None` and contribute nothing to
/// fitness. The fitness evaluator never imputes values itself.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    /// Movie title
    pub title: String,
    /// Genre labels, order-insensitive
    pub genres: BTreeSet<String>,
    /// Cast member names, order-insensitive
    pub cast: BTreeSet<String>,
    /// Director name (empty string when unknown)
    pub director: String,
    /// Release year, if known
    pub release_year: Option<i32>,
    /// Average rating on a 0-10 scale, if known
    pub rating: Option<f64>,
    /// Runtime in minutes
    pub runtime: u32,
}

impl MovieRecord {
    /// Create a record with only the fields the fitness evaluator requires
    pub fn new(title: impl Into<String>, genres: BTreeSet<String>, runtime: u32) -> Self {
        Self {
            title: title.into(),
            genres,
            cast: BTreeSet::new(),
            director: String::new(),
            release_year: None,
            rating: None,
            runtime,
        }
    }

    /// Build a record from raw ingested fields, coercing missing values
    ///
    /// Ingestion collaborators hand over whatever their tabular source had;
    /// absent genre/cast strings become empty sets and an absent director
    /// becomes the empty string. Pipe-separated multi-value fields follow the
    /// common movie-dataset convention.
    #[allow(clippy::too_many_arguments)]
    pub fn normalized(
        title: impl Into<String>,
        genres: Option<&str>,
        cast: Option<&str>,
        director: Option<&str>,
        release_year: Option<i32>,
        rating: Option<f64>,
        runtime: Option<u32>,
    ) -> Self {
        Self {
            title: title.into(),
            genres: split_multi_value(genres.unwrap_or_default()),
            cast: split_multi_value(cast.unwrap_or_default()),
            director: director.unwrap_or_default().trim().to_string(),
            release_year,
            rating: rating.filter(|r| r.is_finite()),
            runtime: runtime.unwrap_or(0),
        }
    }

    /// Set the cast
    pub fn with_cast(mut self, cast: BTreeSet<String>) -> Self {
        self.cast = cast;
        self
    }

    /// Set the director
    pub fn with_director(mut self, director: impl Into<String>) -> Self {
        self.director = director.into();
        self
    }

    /// Set the release year
    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    /// Set the rating
    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = Some(rating);
        self
    }

    /// Check whether any of the given genres appears in this record's genres
    pub fn matches_any_genre<'a, I: IntoIterator<Item = &'a String>>(&self, genres: I) -> bool {
        genres.into_iter().any(|g| self.genres.contains(g.trim()))
    }

    /// Check whether any of the given actors appears in this record's cast
    pub fn matches_any_actor<'a, I: IntoIterator<Item = &'a String>>(&self, actors: I) -> bool {
        actors.into_iter().any(|a| self.cast.contains(a.trim()))
    }

    /// Check whether this record's director equals any of the given names
    ///
    /// Comparison is trimmed and case-sensitive.
    pub fn matches_any_director<'a, I: IntoIterator<Item = &'a String>>(
        &self,
        directors: I,
    ) -> bool {
        let own = self.director.trim();
        !own.is_empty() && directors.into_iter().any(|d| own == d.trim())
    }
}

/// Records compare and hash by value; `rating` participates through its bit
/// pattern, which is sound because `normalized` rejects non-finite ratings.
impl Eq for MovieRecord {}

impl Hash for MovieRecord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.title.hash(state);
        self.genres.hash(state);
        self.cast.hash(state);
        self.director.hash(state);
        self.release_year.hash(state);
        self.rating.map(f64::to_bits).hash(state);
        self.runtime.hash(state);
    }
}

/// Split a pipe-separated field into a trimmed set, dropping empties
fn split_multi_value(raw: &str) -> BTreeSet<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
