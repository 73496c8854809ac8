//! Static title catalog and its hand-curated category indexes
//!
//! The catalog is built once at start-up (see [`CatalogSource`]) and shared
//! read-only behind an `Arc` for the lifetime of the process.
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::{
    error::{AppError, AppResult},
    models::{Dimension, Title, TitleId},
};

pub mod builtin;
pub mod source;

pub use source::{BuiltinCatalog, CatalogSource, JsonFileCatalog};

/// Buckets for a single dimension: answer value -> titles, in curated order
pub type Buckets = BTreeMap<String, Vec<TitleId>>;

/// Hand-curated mapping from quiz answers to prototypical titles
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CategoryIndex {
    #[serde(default)]
    pub mood: Buckets,
    #[serde(default)]
    pub feeling: Buckets,
    #[serde(default)]
    pub duration: Buckets,
    #[serde(default)]
    pub company: Buckets,
    #[serde(default)]
    pub language: Buckets,
}

impl CategoryIndex {
    pub fn buckets(&self, dimension: Dimension) -> &Buckets {
        match dimension {
            Dimension::Mood => &self.mood,
            Dimension::Feeling => &self.feeling,
            Dimension::Duration => &self.duration,
            Dimension::Company => &self.company,
            Dimension::Language => &self.language,
        }
    }

    pub(crate) fn buckets_mut(&mut self, dimension: Dimension) -> &mut Buckets {
        match dimension {
            Dimension::Mood => &mut self.mood,
            Dimension::Feeling => &mut self.feeling,
            Dimension::Duration => &mut self.duration,
            Dimension::Company => &mut self.company,
            Dimension::Language => &mut self.language,
        }
    }

    /// Titles curated for an answer; empty when the answer has no bucket
    pub fn bucket(&self, dimension: Dimension, value: &str) -> &[TitleId] {
        self.buckets(dimension)
            .get(value)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn contains(&self, dimension: Dimension, value: &str, id: &TitleId) -> bool {
        self.bucket(dimension, value).contains(id)
    }

    /// Adds a title to a bucket, ignoring duplicates
    pub fn insert(&mut self, dimension: Dimension, value: &str, id: TitleId) {
        let bucket = self
            .buckets_mut(dimension)
            .entry(value.to_string())
            .or_default();
        if !bucket.contains(&id) {
            bucket.push(id);
        }
    }
}

/// A problem found while validating catalog data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    MissingGenres(TitleId),
    /// `mood_affinity` above 100
    AffinityOutOfRange(TitleId),
    /// `rating` outside 0-10 (or not a number)
    RatingOutOfRange(TitleId),
    UnknownBucketEntry {
        dimension: Dimension,
        value: String,
        id: TitleId,
    },
    UnknownTrendingEntry(TitleId),
}

/// The full set of titles plus their category indexes
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    titles: Vec<Title>,
    positions: HashMap<TitleId, usize>,
    index: CategoryIndex,
    trending: Vec<TitleId>,
}

impl Catalog {
    /// Creates a catalog, rejecting duplicate title identifiers.
    ///
    /// Other inconsistencies (dangling bucket entries, missing genres) are
    /// logged and tolerated; lookups simply never match them.
    pub fn new(titles: Vec<Title>, index: CategoryIndex, trending: Vec<TitleId>) -> AppResult<Self> {
        let mut positions = HashMap::with_capacity(titles.len());
        for (position, title) in titles.iter().enumerate() {
            if positions.insert(title.id.clone(), position).is_some() {
                return Err(AppError::Catalog(format!("duplicate title id '{}'", title.id)));
            }
        }

        let catalog = Self {
            titles,
            positions,
            index,
            trending,
        };

        for issue in catalog.validate() {
            tracing::warn!(issue = ?issue, "Catalog inconsistency");
        }

        Ok(catalog)
    }

    /// Titles in catalog insertion order
    pub fn titles(&self) -> &[Title] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn get(&self, id: &TitleId) -> Option<&Title> {
        self.positions.get(id).map(|&position| &self.titles[position])
    }

    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Curated trending ids, in display order
    pub fn trending_ids(&self) -> &[TitleId] {
        &self.trending
    }

    /// Reports data problems without failing
    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();

        for title in &self.titles {
            if title.genres.is_empty() {
                issues.push(CatalogIssue::MissingGenres(title.id.clone()));
            }
            if title.mood_affinity > 100 {
                issues.push(CatalogIssue::AffinityOutOfRange(title.id.clone()));
            }
            if !(0.0..=10.0).contains(&title.rating) {
                issues.push(CatalogIssue::RatingOutOfRange(title.id.clone()));
            }
        }

        for dimension in Dimension::ALL {
            for (value, ids) in self.index.buckets(dimension) {
                for id in ids.iter().filter(|id| !self.positions.contains_key(*id)) {
                    issues.push(CatalogIssue::UnknownBucketEntry {
                        dimension,
                        value: value.clone(),
                        id: id.clone(),
                    });
                }
            }
        }

        for id in self.trending.iter().filter(|id| !self.positions.contains_key(*id)) {
            issues.push(CatalogIssue::UnknownTrendingEntry(id.clone()));
        }

        issues
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::title;
    use super::*;
    use crate::models::Medium;

    #[test]
    fn test_duplicate_ids_rejected() {
        let titles = vec![
            title("1", Medium::Film, &["Drama"]),
            title("1", Medium::Series, &["Comedy"]),
        ];
        let err = Catalog::new(titles, CategoryIndex::default(), vec![]).unwrap_err();
        assert!(matches!(err, AppError::Catalog(_)));
    }

    #[test]
    fn test_dangling_references_reported_not_fatal() {
        let mut index = CategoryIndex::default();
        index.insert(Dimension::Mood, "Happy", TitleId::new("1"));
        index.insert(Dimension::Mood, "Happy", TitleId::new("404"));

        let catalog = Catalog::new(
            vec![title("1", Medium::Film, &["Comedy"])],
            index,
            vec![TitleId::new("405")],
        )
        .unwrap();

        let issues = catalog.validate();
        assert_eq!(issues.len(), 2);
        assert!(issues.contains(&CatalogIssue::UnknownBucketEntry {
            dimension: Dimension::Mood,
            value: "Happy".to_string(),
            id: TitleId::new("404"),
        }));
        assert!(issues.contains(&CatalogIssue::UnknownTrendingEntry(TitleId::new("405"))));
    }

    #[test]
    fn test_missing_genres_reported() {
        let catalog = Catalog::new(
            vec![title("7", Medium::Series, &[])],
            CategoryIndex::default(),
            vec![],
        )
        .unwrap();
        assert_eq!(
            catalog.validate(),
            vec![CatalogIssue::MissingGenres(TitleId::new("7"))]
        );
    }

    #[test]
    fn test_out_of_range_scores_reported() {
        let mut eager = title("8", Medium::Film, &["Action"]);
        eager.mood_affinity = 120;
        let mut overrated = title("9", Medium::Film, &["Drama"]);
        overrated.rating = 11.5;
        let mut unrated = title("10", Medium::Series, &["Comedy"]);
        unrated.rating = f32::NAN;

        let catalog = Catalog::new(
            vec![eager, overrated, unrated, title("11", Medium::Film, &["Drama"])],
            CategoryIndex::default(),
            vec![],
        )
        .unwrap();
        assert_eq!(
            catalog.validate(),
            vec![
                CatalogIssue::AffinityOutOfRange(TitleId::new("8")),
                CatalogIssue::RatingOutOfRange(TitleId::new("9")),
                CatalogIssue::RatingOutOfRange(TitleId::new("10")),
            ]
        );
    }

    #[test]
    fn test_bucket_lookup_unknown_value_is_empty() {
        let index = CategoryIndex::default();
        assert!(index.bucket(Dimension::Feeling, "Nostalgic").is_empty());
        assert!(!index.contains(Dimension::Feeling, "Nostalgic", &TitleId::new("1")));
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let mut index = CategoryIndex::default();
        index.insert(Dimension::Company, "Solo", TitleId::new("3"));
        index.insert(Dimension::Company, "Solo", TitleId::new("3"));
        assert_eq!(index.bucket(Dimension::Company, "Solo").len(), 1);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::new(
            vec![title("1", Medium::Film, &["Drama"]), title("2", Medium::Series, &["Comedy"])],
            CategoryIndex::default(),
            vec![],
        )
        .unwrap();
        assert_eq!(catalog.get(&TitleId::new("2")).map(|t| t.medium), Some(Medium::Series));
        assert!(catalog.get(&TitleId::new("3")).is_none());
        assert_eq!(catalog.len(), 2);
    }
}
