//! The in-memory index store.

use crate::error::{ParseError, Result, Violation};
use crate::parse::parse_index;
use crate::record::{Category, IndexRecord};
use ahash::AHashMap;
use anyhow::Context;
use std::path::Path;
use std::sync::LazyLock;

/// The canonical artifact this crate ships: the published PNML documentation
/// search index, regenerated wholesale by the doc build that produced it.
const EMBEDDED_INDEX: &str = include_str!("../assets/search_index.js");

static EMBEDDED_STORE: LazyLock<IndexStore> = LazyLock::new(|| {
    IndexStore::from_source(EMBEDDED_INDEX).expect("embedded search index parses")
});

/// An ordered, immutable sequence of index records with exact-location lookup.
///
/// Built once, never mutated. There are no writers after construction, so the
/// store is freely shared across threads without locking.
#[derive(Debug, Clone)]
pub struct IndexStore {
    records: Vec<IndexRecord>,
    /// Map from exact location string to record positions, in record order.
    by_location: AHashMap<String, Vec<usize>>,
}

/// The lookup map is derived from the records, so equality is record equality.
impl PartialEq for IndexStore {
    fn eq(&self, other: &Self) -> bool {
        self.records == other.records
    }
}

impl Eq for IndexStore {}

impl IndexStore {
    /// The embedded canonical index. Always succeeds; repeated calls return
    /// the same structure.
    pub fn load() -> &'static Self {
        &EMBEDDED_STORE
    }

    /// Builds a store from an ordered record sequence.
    pub fn from_records(records: Vec<IndexRecord>) -> Self {
        let mut by_location: AHashMap<String, Vec<usize>> = AHashMap::new();
        for (i, record) in records.iter().enumerate() {
            by_location.entry(record.location.clone()).or_default().push(i);
        }
        Self {
            records,
            by_location,
        }
    }

    /// Parses an index literal into a store.
    pub fn from_source(source: &str) -> std::result::Result<Self, ParseError> {
        parse_index(source).map(Self::from_records)
    }

    /// Reads and parses an index file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read index file {}", path.display()))?;
        let store = Self::from_source(&source)
            .with_context(|| format!("failed to parse index file {}", path.display()))?;
        tracing::debug!(
            "Parsed {} records from {}",
            store.len(),
            path.display()
        );
        Ok(store)
    }

    /// The full ordered record sequence.
    pub fn records(&self) -> &[IndexRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexRecord> {
        self.records.iter()
    }

    /// All records at an exact location, in record order. Multiple records
    /// commonly share a location (a type and its constructor method).
    pub fn at_location<'a>(&'a self, location: &str) -> impl Iterator<Item = &'a IndexRecord> {
        self.by_location
            .get(location)
            .into_iter()
            .flatten()
            .map(|&i| &self.records[i])
    }

    /// The ordered subsequence of records in `category`.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &IndexRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Record tallies per category, in [`Category::ALL`] order.
    pub fn category_counts(&self) -> [(Category, usize); 8] {
        let mut counts = Category::ALL.map(|c| (c, 0));
        for record in &self.records {
            counts[record.category as usize].1 += 1;
        }
        counts
    }

    /// Checks the data-dependent index invariants: every callable record
    /// (`method` or `function`) must carry a non-empty title.
    pub fn verify(&self) -> std::result::Result<(), Vec<Violation>> {
        let violations: Vec<Violation> = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, r)| r.category.is_callable() && r.title.is_empty())
            .map(|(index, r)| Violation::EmptyCallableTitle {
                index,
                category: r.category,
                location: r.location.clone(),
            })
            .collect();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<'a> IntoIterator for &'a IndexStore {
    type Item = &'a IndexRecord;
    type IntoIter = std::slice::Iter<'a, IndexRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
