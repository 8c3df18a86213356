//! Preference profile
//!
//! This module provides the taste profile an evolution run optimizes against.

use serde::{Deserialize, Serialize};

use crate::catalog::MovieRecord;

/// A user's taste profile
///
/// Built once per run from normalized input. Resolved favorite movies fold
/// their genres, cast, and director into the corresponding lists before the
/// loop starts, so the fitness evaluator only ever sees plain term lists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    /// Preferred genres
    pub genres: Vec<String>,
    /// Preferred actors
    pub actors: Vec<String>,
    /// Preferred directors
    pub directors: Vec<String>,
    /// Target list-entry runtime in minutes
    pub target_runtime: u32,
    /// Target release year, if the user tracks one
    pub target_year: Option<i32>,
    /// Minimum acceptable rating, if the user tracks one
    pub min_rating: Option<f64>,
    /// Titles of the user's favorite movies
    pub favorite_titles: Vec<String>,
    /// Titles (or title fragments) the user never wants to see
    pub unwanted_titles: Vec<String>,
}

impl PreferenceProfile {
    /// Create a profile with the given target runtime and empty term lists
    pub fn new(target_runtime: u32) -> Self {
        Self {
            target_runtime,
            ..Self::default()
        }
    }

    /// Set the preferred genres
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    /// Set the preferred actors
    pub fn with_actors(mut self, actors: Vec<String>) -> Self {
        self.actors = actors;
        self
    }

    /// Set the preferred directors
    pub fn with_directors(mut self, directors: Vec<String>) -> Self {
        self.directors = directors;
        self
    }

    /// Set the target release year
    pub fn with_target_year(mut self, year: i32) -> Self {
        self.target_year = Some(year);
        self
    }

    /// Set the minimum rating
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Set the unwanted titles
    pub fn with_unwanted_titles(mut self, titles: Vec<String>) -> Self {
        self.unwanted_titles = titles;
        self
    }

    /// Fold a resolved favorite movie's attributes into the profile
    ///
    /// The record's genres and cast are appended to the genre and actor
    /// lists, its director to the director list, and its title to
    /// `favorite_titles`.
    pub fn fold_favorite(&mut self, record: &MovieRecord) {
        self.genres.extend(record.genres.iter().cloned());
        self.actors.extend(record.cast.iter().cloned());
        if !record.director.is_empty() {
            self.directors.push(record.director.clone());
        }
        self.favorite_titles.push(record.title.clone());
    }
}
