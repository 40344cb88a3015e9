//! The `Searcher` trait, which defines the interface for match strategies.

use crate::context::SearchContext;
use crate::types::{Searchable, SearcherKind, SearchMatch};

/// A trait for pluggable match strategies.
///
/// The `SearchEngine` runs every registered searcher over the same context,
/// keeps the best tier per item and ranks the survivors. Searchers must not
/// mutate the items they look at; every call builds its own matches.
pub trait Searcher<T: Searchable>: Send + Sync {
  /// Returns the `SearcherKind` of this searcher.
  fn kind(&self) -> SearcherKind;

  /// Decides which items match the normalized query in `context`.
  ///
  /// Results need not be sorted or unique; the engine ranks and deduplicates
  /// them by `SearchMatch::id`.
  fn search(&self, context: &SearchContext<T>) -> Vec<SearchMatch<T>>;
}
