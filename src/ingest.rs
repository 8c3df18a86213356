//! Preference ingestion
//!
//! This module turns raw free-text input into a validated
//! [`PreferenceProfile`] and [`GaConfig`] before a run starts. It is the
//! boundary the interactive form (or any other front end) talks to; the
//! engine itself only ever sees resolved, normalized values.

use log::warn;

use crate::catalog::Catalog;
use crate::config::GaConfig;
use crate::error::PreferenceError;
use crate::preferences::PreferenceProfile;

/// Raw taste input as captured from a form
///
/// List fields are comma-separated free text; optional numeric fields use
/// the empty string for "not tracked".
#[derive(Clone, Debug, Default)]
pub struct RawPreferences {
    /// Comma-separated genres
    pub genres: String,
    /// Comma-separated actors
    pub actors: String,
    /// Comma-separated directors
    pub directors: String,
    /// Target runtime in minutes
    pub duration: String,
    /// Comma-separated favorite movie titles
    pub favorite_movies: String,
    /// Comma-separated unwanted movie titles
    pub unwanted_movies: String,
    /// Optional target release year
    pub target_year: String,
    /// Optional minimum rating
    pub min_rating: String,
}

/// Raw run parameters as captured from a form
#[derive(Clone, Debug, Default)]
pub struct RawRunSettings {
    pub generations: String,
    pub crossover_probability: String,
    pub mutation_probability: String,
    pub initial_population_size: String,
    pub max_population_size: String,
    pub num_movies_per_list: String,
}

/// Title-case a term: first letter of each word upper, rest lower
pub fn title_case(term: &str) -> String {
    term.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split comma-separated free text into trimmed, title-cased terms
pub fn split_terms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(title_case)
        .collect()
}

/// Build a preference profile from raw input, resolving favorites
///
/// Each favorite title is resolved against the catalog (first
/// case-insensitive substring match) and its genres, cast, and director are
/// folded into the profile. Unresolvable favorites are skipped with a
/// warning. Fails before any generation runs if a numeric field does not
/// parse.
pub fn build_profile(
    raw: &RawPreferences,
    catalog: &Catalog,
) -> Result<PreferenceProfile, PreferenceError> {
    let duration: u32 = parse_field("duration", &raw.duration)?;

    let mut profile = PreferenceProfile::new(duration)
        .with_genres(split_terms(&raw.genres))
        .with_actors(split_terms(&raw.actors))
        .with_directors(split_terms(&raw.directors));

    if let Some(year) = parse_optional_field("target_year", &raw.target_year)? {
        profile.target_year = Some(year);
    }
    if let Some(rating) = parse_optional_field("min_rating", &raw.min_rating)? {
        profile.min_rating = Some(rating);
    }

    // Unwanted fragments stay as typed (trimmed only): the pruner matches
    // them as case-sensitive substrings against catalog titles
    profile.unwanted_titles = raw
        .unwanted_movies
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    for favorite in split_terms(&raw.favorite_movies) {
        match catalog.find_by_title(&favorite) {
            Some(record) => profile.fold_favorite(record),
            None => warn!("Favorite '{favorite}' not found in catalog, skipping"),
        }
    }

    Ok(profile)
}

/// Parse raw run settings into a validated configuration
pub fn parse_settings(raw: &RawRunSettings) -> Result<GaConfig, PreferenceError> {
    let config = GaConfig {
        generations: parse_field("generations", &raw.generations)?,
        crossover_probability: parse_field("crossover_probability", &raw.crossover_probability)?,
        mutation_probability: parse_field("mutation_probability", &raw.mutation_probability)?,
        initial_population_size: parse_field(
            "initial_population_size",
            &raw.initial_population_size,
        )?,
        max_population_size: parse_field("max_population_size", &raw.max_population_size)?,
        num_movies_per_list: parse_field("num_movies_per_list", &raw.num_movies_per_list)?,
    };
    config.validate()?;
    Ok(config)
}

fn parse_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<T, PreferenceError> {
    value
        .trim()
        .parse()
        .map_err(|_| PreferenceError::InvalidNumber {
            field,
            value: value.trim().to_string(),
        })
}

fn parse_optional_field<T: std::str::FromStr>(
    field: &'static str,
    value: &str,
) -> Result<Option<T>, PreferenceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        parse_field(field, trimmed).map(Some)
    }
}
