//! Context provided to searchers during a search operation.

use crate::searchers::tokenizer::NormalizedQuery;

/// Everything a searcher needs for one call: the read-only items and the
/// query, normalized once up front.
pub struct SearchContext<'a, T> {
  /// The slice of items to be searched.
  pub items: &'a [T],
  /// The normalized query shared by all searchers in this call.
  pub query: NormalizedQuery,
}

impl<'a, T> SearchContext<'a, T> {
  /// Creates a new `SearchContext`, normalizing `raw_query`.
  pub fn new(items: &'a [T], raw_query: &str) -> Self {
    Self {
      items,
      query: NormalizedQuery::new(raw_query),
    }
  }
}
