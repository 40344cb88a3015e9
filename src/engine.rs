//! The search engine that runs match strategies and ranks their output.

use crate::context::SearchContext;
use crate::rank::sort_matches;
use crate::searcher::Searcher;
use crate::searchers::tiered::{TieredSearch, TieredSearchable};
use crate::types::{AttractionRecord, Query, ScoredAttraction, SearchMatch, SearchRecord, Searchable};
use std::collections::BTreeMap;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs a set of searchers over a catalog and returns one ranked list.
///
/// The engine holds no state between calls: the catalog is borrowed
/// read-only and every call builds fresh matches, so a single engine can
/// serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use jumbah_search::prelude::*;
///
/// let catalog = vec![
///     AttractionRecord::new("Mount Kinabalu", "Malaysia's highest peak", "Ranau"),
///     AttractionRecord::new("Tunku Abdul Rahman Park", "5 islands for snorkeling", "Kota Kinabalu"),
/// ];
///
/// let engine = SearchEngine::default();
/// let results = engine.search(&catalog, &Query::new("kinabalu"));
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].item.name, "Mount Kinabalu");
/// ```
pub struct SearchEngine<T: Searchable> {
  /// The registered match strategies.
  searchers: Vec<Box<dyn Searcher<T>>>,
}

impl<T: SearchRecord + Clone> SearchEngine<T> {
  /// Creates a new `SearchEngineBuilder` to construct an engine.
  pub fn builder() -> SearchEngineBuilder<T> {
    SearchEngineBuilder::new()
  }

  /// Searches `items` and returns ranked, deduplicated matches.
  ///
  /// ## Lifecycle
  ///
  /// 1. The query text is trimmed, lower-cased and split into words. A blank
  ///    query returns no results.
  /// 2. Every searcher sees the same context.
  /// 3. Matches are merged by item, keeping the best tier for each.
  /// 4. The merged list is sorted by tier, then by name.
  /// 5. `skip` and `limit` from the query options are applied.
  pub fn search(&self, items: &[T], query: &Query) -> Vec<SearchMatch<T>> {
    let context = SearchContext::new(items, &query.text);
    if context.query.is_empty() || self.searchers.is_empty() {
      debug!(query = %query.text, "blank query or no searchers");
      return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let all_results: Vec<Vec<SearchMatch<T>>> = self
      .searchers
      .par_iter()
      .map(|searcher| searcher.search(&context))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let all_results: Vec<Vec<SearchMatch<T>>> = self
      .searchers
      .iter()
      .map(|searcher| searcher.search(&context))
      .collect();

    let mut merged = self.merge_results(all_results);
    sort_matches(&mut merged);

    debug!(
      query = %context.query.phrase,
      candidates = items.len(),
      matches = merged.len(),
      "search finished"
    );

    let skip = query.options.skip;
    let limit = query.options.limit.unwrap_or(usize::MAX);
    merged.into_iter().skip(skip).take(limit).collect()
  }

  /// Keeps one match per item: the one with the highest tier. Ties keep the
  /// match reported first. The output is in item order.
  fn merge_results(&self, results: Vec<Vec<SearchMatch<T>>>) -> Vec<SearchMatch<T>> {
    let mut merged: BTreeMap<usize, SearchMatch<T>> = BTreeMap::new();

    for m in results.into_iter().flatten() {
      match merged.get(&m.id) {
        Some(existing) if existing.tier >= m.tier => {}
        _ => {
          merged.insert(m.id, m);
        }
      }
    }

    merged.into_values().collect()
  }
}

impl<T: TieredSearchable> Default for SearchEngine<T> {
  /// An engine with a single [`TieredSearch`] using the default rules.
  fn default() -> Self {
    SearchEngine::builder().with(Box::new(TieredSearch::new())).build()
  }
}

/// A builder for creating `SearchEngine` instances.
pub struct SearchEngineBuilder<T: Searchable> {
  searchers: Vec<Box<dyn Searcher<T>>>,
}

impl<T: Searchable> Default for SearchEngineBuilder<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T: Searchable> SearchEngineBuilder<T> {
  /// Creates a new, empty `SearchEngineBuilder`.
  pub fn new() -> Self {
    Self {
      searchers: Vec::new(),
    }
  }

  /// Adds a searcher to the engine.
  pub fn with(mut self, searcher: Box<dyn Searcher<T>>) -> Self {
    self.searchers.push(searcher);
    self
  }

  /// Builds the `SearchEngine` with the configured searchers.
  pub fn build(self) -> SearchEngine<T> {
    SearchEngine {
      searchers: self.searchers,
    }
  }
}

/// Search a catalog of attractions with the default tier rules.
///
/// Returns every matching record, best tier first and alphabetical within a
/// tier. A blank query yields an empty list.
pub fn search(query: &str, catalog: &[AttractionRecord]) -> Vec<ScoredAttraction> {
  SearchEngine::default().search(catalog, &Query::new(query))
}
