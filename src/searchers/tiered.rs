//! A `Searcher` that admits each record at the best of four match tiers.

use crate::context::SearchContext;
use crate::rules::TierRules;
use crate::searcher::Searcher;
use crate::searchers::similarity::similarity;
use crate::searchers::tokenizer::{char_len, NormalizedQuery};
use crate::types::{MatchDetail, MatchTier, SearchMatch, SearchRecord, SearcherKind};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

pub trait TieredSearchable: SearchRecord + Clone {}
impl<T: SearchRecord + Clone> TieredSearchable for T {}

/// Phrase, all-words, prefix and fuzzy matching, tried in that order.
///
/// Each record is checked against the tiers from best to worst and admitted
/// at the first one it satisfies, so a record appears at most once:
///
/// 1. **Exact (100)**: the whole normalized query is a substring of the
///    record's searchable text.
/// 2. **AllWords (80)**: every query word is a substring of that text.
/// 3. **Prefix (60)**: enough query words (see [`TierRules::prefix_quorum`])
///    of at least [`TierRules::prefix_min_len`] characters start some
///    searchable word.
/// 4. **Fuzzy (40)**: some query word of at least
///    [`TierRules::fuzzy_min_len`] characters has a similarity above
///    [`TierRules::fuzzy_threshold`] with some searchable word.
#[derive(Debug, Clone, Default)]
pub struct TieredSearch {
  rules: TierRules,
}

impl TieredSearch {
  /// Creates a searcher with the default rules.
  pub fn new() -> Self {
    Self::default()
  }

  /// Creates a searcher with custom rules.
  pub fn with_rules(rules: TierRules) -> Self {
    Self { rules }
  }

  pub fn rules(&self) -> &TierRules {
    &self.rules
  }

  /// Decides the tier of one searchable text, if any.
  pub fn classify(&self, text: &str, query: &NormalizedQuery) -> Option<(MatchTier, MatchDetail)> {
    if query.is_empty() {
      return None;
    }

    if text.contains(query.phrase.as_str()) {
      return Some((
        MatchTier::Exact,
        MatchDetail::Phrase {
          phrase: query.phrase.clone(),
        },
      ));
    }

    if query.words.iter().all(|word| text.contains(word.as_str())) {
      return Some((
        MatchTier::AllWords,
        MatchDetail::AllWords {
          words: query.words.clone(),
        },
      ));
    }

    let searchable_words: Vec<&str> = text.split_whitespace().collect();

    let matched: Vec<String> = query
      .words
      .iter()
      .filter(|word| char_len(word) >= self.rules.prefix_min_len)
      .filter(|word| searchable_words.iter().any(|sw| sw.starts_with(word.as_str())))
      .cloned()
      .collect();
    let required = self.rules.required_prefix_hits(query.words.len());
    trace!(hits = matched.len(), required, "prefix tier");
    if matched.len() >= required {
      return Some((MatchTier::Prefix, MatchDetail::Prefix { matched, required }));
    }

    self
      .best_fuzzy_pair(&searchable_words, query)
      .map(|(original_term, matched_term, similarity)| {
        (
          MatchTier::Fuzzy,
          MatchDetail::Fuzzy {
            original_term,
            matched_term,
            similarity,
          },
        )
      })
  }

  /// The most similar (query word, searchable word) pair above the threshold.
  fn best_fuzzy_pair(
    &self,
    searchable_words: &[&str],
    query: &NormalizedQuery,
  ) -> Option<(String, String, f64)> {
    let mut best: Option<(String, String, f64)> = None;

    for query_term in &query.words {
      if char_len(query_term) < self.rules.fuzzy_min_len {
        continue;
      }

      for doc_term in searchable_words {
        let score = similarity(query_term, doc_term);
        if score <= self.rules.fuzzy_threshold {
          continue;
        }
        if best.as_ref().map_or(true, |(_, _, s)| score > *s) {
          best = Some((query_term.clone(), (*doc_term).to_string(), score));
        }
      }
    }

    best
  }

  /// Match a single entity against the query.
  pub fn match_entity<T>(&self, item: &T, index: usize, query: &NormalizedQuery) -> Option<SearchMatch<T>>
  where
    T: TieredSearchable,
  {
    let text = item.searchable_text();
    let (tier, detail) = self.classify(&text, query)?;
    trace!(name = item.name(), score = tier.score(), "admitted");
    Some(SearchMatch::new(item.clone(), tier, index).with_detail(detail))
  }
}

impl<T> Searcher<T> for TieredSearch
where
  T: TieredSearchable,
{
  fn kind(&self) -> SearcherKind {
    SearcherKind::Tiered
  }

  fn search(&self, context: &SearchContext<T>) -> Vec<SearchMatch<T>> {
    let query = &context.query;
    if query.is_empty() {
      return Vec::new();
    }

    #[cfg(feature = "parallel")]
    let results: Vec<SearchMatch<T>> = context
      .items
      .par_iter()
      .enumerate()
      .filter_map(|(index, item)| self.match_entity(item, index, query))
      .collect();

    #[cfg(not(feature = "parallel"))]
    let results: Vec<SearchMatch<T>> = context
      .items
      .iter()
      .enumerate()
      .filter_map(|(index, item)| self.match_entity(item, index, query))
      .collect();

    results
  }
}
