//! Movie catalog
//!
//! This module provides the read-only catalog the algorithm samples from.

pub mod record;

pub use record::MovieRecord;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::CatalogError;

/// An ordered, immutable collection of movie records
///
/// The catalog is built once by an ingestion collaborator and borrowed by the
/// engine for the duration of a run; it is never mutated afterwards.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
}

impl Catalog {
    /// Create a catalog from a vector of records
    pub fn from_records(records: Vec<MovieRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the catalog
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by index
    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    /// Iterate over all records
    pub fn iter(&self) -> impl Iterator<Item = &MovieRecord> {
        self.records.iter()
    }

    /// Draw `count` distinct records without replacement
    pub fn sample_distinct<R: Rng>(
        &self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<MovieRecord>, CatalogError> {
        if self.records.is_empty() {
            return Err(CatalogError::Empty);
        }
        if count > self.records.len() {
            return Err(CatalogError::InsufficientCatalog {
                requested: count,
                available: self.records.len(),
            });
        }

        Ok(self
            .records
            .choose_multiple(rng, count)
            .cloned()
            .collect())
    }

    /// Draw one record uniformly at random
    ///
    /// The draw is unconstrained; callers that need distinctness (e.g. the
    /// survivor pruner's view of an individual) enforce it themselves.
    pub fn random_record<R: Rng>(&self, rng: &mut R) -> Result<&MovieRecord, CatalogError> {
        self.records.choose(rng).ok_or(CatalogError::Empty)
    }

    /// Find the first record whose title contains `query`, case-insensitively
    pub fn find_by_title(&self, query: &str) -> Option<&MovieRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.records
            .iter()
            .find(|r| r.title.to_lowercase().contains(&needle))
    }
}

impl std::ops::Index<usize> for Catalog {
    type Output = MovieRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}
