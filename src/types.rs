//! Core data types for the attraction search.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "parallel")]
pub trait Searchable: Send + Sync {}
#[cfg(feature = "parallel")]
impl<T: Send + Sync> Searchable for T {}

#[cfg(not(feature = "parallel"))]
pub trait Searchable {}
#[cfg(not(feature = "parallel"))]
impl<T> Searchable for T {}

/// A record that the tiered pipeline knows how to match and rank.
///
/// Implementors expose the display name used for tie-breaking and the
/// composite searchable text the match tiers run against. The text is
/// rebuilt on every search call; nothing is cached on the record.
pub trait SearchRecord: Searchable {
  /// The name used as the secondary ranking key.
  fn name(&self) -> &str;

  /// The lower-cased, space-joined concatenation of every textual field.
  fn searchable_text(&self) -> String;
}

/// A single attraction as the search sees it.
///
/// Entries are owned by the catalog and never mutated by a search. Optional
/// fields that are absent contribute an empty string to the searchable text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttractionRecord {
  pub name: String,
  #[serde(alias = "desc")]
  pub description: String,
  pub district: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,
  #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
  pub kind: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub location: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub activities: Vec<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub tags: Vec<String>,
}

impl AttractionRecord {
  /// Creates a record with the three mandatory fields.
  pub fn new(
    name: impl Into<String>,
    description: impl Into<String>,
    district: impl Into<String>,
  ) -> Self {
    Self {
      name: name.into(),
      description: description.into(),
      district: district.into(),
      ..Self::default()
    }
  }

  pub fn with_category(mut self, category: impl Into<String>) -> Self {
    self.category = Some(category.into());
    self
  }

  pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
    self.kind = Some(kind.into());
    self
  }

  pub fn with_location(mut self, location: impl Into<String>) -> Self {
    self.location = Some(location.into());
    self
  }

  pub fn with_activities<I, S>(mut self, activities: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.activities = activities.into_iter().map(Into::into).collect();
    self
  }

  pub fn with_tags<I, S>(mut self, tags: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.tags = tags.into_iter().map(Into::into).collect();
    self
  }
}

impl SearchRecord for AttractionRecord {
  fn name(&self) -> &str {
    &self.name
  }

  fn searchable_text(&self) -> String {
    let activities = self.activities.join(" ");
    let tags = self.tags.join(" ");
    crate::searchers::tokenizer::compose([
      self.name.as_str(),
      self.description.as_str(),
      self.district.as_str(),
      self.category.as_deref().unwrap_or(""),
      self.kind.as_deref().unwrap_or(""),
      self.location.as_deref().unwrap_or(""),
      activities.as_str(),
      tags.as_str(),
    ])
  }
}

/// The four match-quality buckets, best first.
///
/// The numeric scores are kept for compatibility with existing consumers of
/// `searchScore`; they are policy, not arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MatchTier {
  /// The whole normalized query occurs in the searchable text.
  Exact,
  /// Every query word occurs somewhere in the searchable text.
  AllWords,
  /// Enough query words prefix a searchable word.
  Prefix,
  /// At least one query word is within edit-distance of a searchable word.
  Fuzzy,
}

impl MatchTier {
  /// All tiers in the order the pipeline tries them.
  pub const ALL: [MatchTier; 4] = [
    MatchTier::Exact,
    MatchTier::AllWords,
    MatchTier::Prefix,
    MatchTier::Fuzzy,
  ];

  /// The integer `searchScore` of this tier.
  pub fn score(self) -> u8 {
    match self {
      MatchTier::Exact => 100,
      MatchTier::AllWords => 80,
      MatchTier::Prefix => 60,
      MatchTier::Fuzzy => 40,
    }
  }

  /// The label a presentation layer shows next to a result.
  pub fn label(self) -> &'static str {
    match self.score() {
      s if s > 80 => "Exact match",
      s if s > 60 => "Good match",
      _ => "Partial match",
    }
  }
}

impl PartialOrd for MatchTier {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for MatchTier {
  fn cmp(&self, other: &Self) -> Ordering {
    self.score().cmp(&other.score())
  }
}

impl fmt::Display for MatchTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl From<MatchTier> for u8 {
  fn from(tier: MatchTier) -> u8 {
    tier.score()
  }
}

impl TryFrom<u8> for MatchTier {
  type Error = String;

  fn try_from(score: u8) -> Result<Self, Self::Error> {
    MatchTier::ALL
      .into_iter()
      .find(|tier| tier.score() == score)
      .ok_or_else(|| format!("{score} is not a search tier score"))
  }
}

/// A record that matched a search, together with why it matched.
///
/// The score lives here rather than on the record so that a shared catalog
/// never carries state from one call into the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch<T> {
  /// Position of the item in the slice that was searched.
  #[serde(skip)]
  pub id: usize,
  /// The matched item.
  #[serde(flatten)]
  pub item: T,
  /// The tier the item qualified for.
  #[serde(rename = "searchScore")]
  pub tier: MatchTier,
  /// How the tier was reached.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub details: Vec<MatchDetail>,
}

/// A scored attraction as returned by [`crate::engine::search`].
pub type ScoredAttraction = SearchMatch<AttractionRecord>;

impl<T> SearchMatch<T> {
  pub fn new(item: T, tier: MatchTier, id: usize) -> Self {
    Self {
      id,
      item,
      tier,
      details: Vec::new(),
    }
  }

  /// Adds a match detail.
  pub fn with_detail(mut self, detail: MatchDetail) -> Self {
    self.details.push(detail);
    self
  }

  /// Shorthand for `self.tier.score()`.
  pub fn search_score(&self) -> u8 {
    self.tier.score()
  }
}

/// Explains which strategy admitted a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum MatchDetail {
  /// The full query phrase was found verbatim.
  Phrase { phrase: String },
  /// Each of these words was found as a substring.
  AllWords { words: Vec<String> },
  /// These query words prefixed some searchable word.
  Prefix {
    matched: Vec<String>,
    /// How many prefix hits the quorum asked for.
    required: usize,
  },
  /// The closest approximate pair that cleared the threshold.
  Fuzzy {
    original_term: String,
    matched_term: String,
    similarity: f64,
  },
}

/// A search request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Query {
  /// Raw text as typed by the user.
  pub text: String,
  #[serde(default)]
  pub options: SearchOptions,
}

impl Query {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      options: SearchOptions::default(),
    }
  }

  /// Creates a new `QueryBuilder` to construct a `Query` in a chained manner.
  pub fn builder() -> QueryBuilder {
    QueryBuilder::default()
  }
}

/// A builder for creating `Query` instances.
#[derive(Debug, Default)]
pub struct QueryBuilder {
  text: String,
  options: SearchOptions,
}

impl QueryBuilder {
  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text = text.into();
    self
  }

  pub fn options(mut self, options: SearchOptions) -> Self {
    self.options = options;
    self
  }

  pub fn build(self) -> Query {
    Query {
      text: self.text,
      options: self.options,
    }
  }
}

/// Pagination applied after ranking. The default returns every match.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
  /// The number of ranked results to skip.
  #[serde(default)]
  pub skip: usize,
  /// The maximum number of results to return, if any.
  #[serde(default)]
  pub limit: Option<usize>,
}

impl SearchOptions {
  pub fn skip(mut self, skip: usize) -> Self {
    self.skip = skip;
    self
  }

  pub fn limit(mut self, limit: usize) -> Self {
    self.limit = Some(limit);
    self
  }
}

/// Identifies a searcher implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearcherKind {
  /// The built-in phrase / all-words / prefix / fuzzy pipeline.
  Tiered,
  /// A user-supplied searcher.
  Custom,
}
