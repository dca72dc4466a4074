//! # Food Search
//!
//! Autocomplete over the in-memory catalog.
//!
//!
//!
//! ## Matching
//! - Query and catalog text both go through [`catalog::fold`], so `kjott` finds `Kjøttdeig`.
//! - Query is split on whitespace. Every term must match (AND), a single missing term drops the food.
//!
//!
//!
//! ## Ranking
//! Two tiers, each in catalog order:
//! 1. **Prefix**: every term is a prefix of the whole folded name (not per word).
//! 2. **Contains**: every term appears somewhere in the folded name + keywords.
//!
//! Tier 1 comes first, then tier 2, capped at [`MAX_RESULTS`].
//!
//! An empty query is a browse request and returns the first [`MAX_RESULTS`] foods as stored.
//!
//!
//!
//! ## Notes
//! Folded forms are computed per query rather than kept in the catalog. For a few thousand foods
//! this is well under a millisecond and keeps the snapshot format plain.
use catalog::{CatalogRecord, fold};
use serde::Serialize;

pub const MAX_RESULTS: usize = 50;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub keywords: String,
}

impl From<&CatalogRecord> for SearchResult {
    fn from(record: &CatalogRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            keywords: record.keywords.clone(),
        }
    }
}

struct Candidate<'a> {
    record: &'a CatalogRecord,
    name_norm: String,
    haystack: String,
}

impl<'a> Candidate<'a> {
    fn new(record: &'a CatalogRecord) -> Self {
        Self {
            record,
            name_norm: fold(&record.name),
            haystack: fold(&format!("{} {}", record.name, record.keywords)),
        }
    }

    fn starts_with_all(&self, terms: &[&str]) -> bool {
        terms.iter().all(|term| self.name_norm.starts_with(*term))
    }

    fn contains_all(&self, terms: &[&str]) -> bool {
        terms.iter().all(|term| self.haystack.contains(*term))
    }
}

pub fn tokenize_query(folded: &str) -> Vec<&str> {
    folded.split_whitespace().collect()
}

pub fn search(query: Option<&str>, catalog: &[CatalogRecord]) -> Vec<SearchResult> {
    let folded = fold(query.unwrap_or_default().trim());
    let terms = tokenize_query(&folded);

    if terms.is_empty() {
        return catalog.iter().take(MAX_RESULTS).map(SearchResult::from).collect();
    }

    let candidates: Vec<Candidate> = catalog.iter().map(Candidate::new).collect();
    let mut in_prefix_tier = vec![false; candidates.len()];
    let mut ranked: Vec<&CatalogRecord> = Vec::with_capacity(MAX_RESULTS);

    for (index, candidate) in candidates.iter().enumerate() {
        if ranked.len() == MAX_RESULTS {
            break;
        }

        if candidate.starts_with_all(&terms) {
            in_prefix_tier[index] = true;
            ranked.push(candidate.record);
        }
    }

    for (index, candidate) in candidates.iter().enumerate() {
        if ranked.len() == MAX_RESULTS {
            break;
        }

        if !in_prefix_tier[index] && candidate.contains_all(&terms) {
            ranked.push(candidate.record);
        }
    }

    ranked.into_iter().map(SearchResult::from).collect()
}
