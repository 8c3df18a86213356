//! Fitness evaluation
//!
//! This module defines the fitness trait and the preference-based evaluator.

use serde::{Deserialize, Serialize};

use crate::catalog::MovieRecord;
use crate::population::individual::Individual;
use crate::preferences::PreferenceProfile;

/// Fitness function over movie lists
///
/// Implementations must be pure: no side effects, and identical inputs always
/// produce identical scores. Fitness is recomputed whenever an individual is
/// scored; nothing is cached across generations.
pub trait Fitness {
    /// Score a movie list
    fn evaluate(&self, movies: &[MovieRecord]) -> f64;
}

/// Pairing of an individual with its scalar fitness
///
/// Rebuilt from the final survivor set at the end of a run; scores may be
/// negative when runtime penalties dominate.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FitnessRecord {
    /// The scored individual
    pub individual: Individual,
    /// Its fitness at scoring time
    pub fitness: f64,
}

/// Preference-based fitness evaluator
///
/// Per-movie contributions, summed over the list:
/// - +2 when the movie shares any genre with the profile
/// - +1 when the movie shares any cast member with the profile
/// - +1 when the movie's director matches any preferred director
/// - + rating / 10 when the profile tracks a minimum rating
/// - − |target_year − release_year| / 100 when the profile tracks a year
/// - − |target_runtime − runtime| / 100, always
///
/// A single shared genre or actor earns the full bonus; matching is "any
/// overlap", never "all must match".
#[derive(Clone, Debug)]
pub struct PreferenceFitness<'a> {
    preferences: &'a PreferenceProfile,
}

impl<'a> PreferenceFitness<'a> {
    /// Create an evaluator for the given profile
    pub fn new(preferences: &'a PreferenceProfile) -> Self {
        Self { preferences }
    }

    /// Score one movie against the profile
    pub fn score_movie(&self, movie: &MovieRecord) -> f64 {
        let prefs = self.preferences;
        let mut score = 0.0;

        if movie.matches_any_genre(&prefs.genres) {
            score += 2.0;
        }
        if movie.matches_any_actor(&prefs.actors) {
            score += 1.0;
        }
        if movie.matches_any_director(&prefs.directors) {
            score += 1.0;
        }

        if prefs.min_rating.is_some() {
            if let Some(rating) = movie.rating {
                score += rating / 10.0;
            }
        }
        if let (Some(target), Some(year)) = (prefs.target_year, movie.release_year) {
            score -= f64::from((target - year).abs()) / 100.0;
        }

        score -= (f64::from(prefs.target_runtime) - f64::from(movie.runtime)).abs() / 100.0;
        score
    }
}

impl Fitness for PreferenceFitness<'_> {
    fn evaluate(&self, movies: &[MovieRecord]) -> f64 {
        movies.iter().map(|m| self.score_movie(m)).sum()
    }
}
