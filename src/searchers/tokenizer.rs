//! Text normalization utilities.

use unicode_segmentation::UnicodeSegmentation;

/// Lower-case and trim.
pub fn normalize(text: &str) -> String {
  text.trim().to_lowercase()
}

/// Split on runs of whitespace, dropping empty tokens.
pub fn tokenize(text: &str) -> Vec<String> {
  text.split_whitespace().map(str::to_owned).collect()
}

/// Build composite searchable text: every field lower-cased, joined by a
/// single space. Empty fields still contribute their separator.
pub fn compose<'a, I>(fields: I) -> String
where
  I: IntoIterator<Item = &'a str>,
{
  fields
    .into_iter()
    .collect::<Vec<_>>()
    .join(" ")
    .to_lowercase()
}

/// Length in user-perceived characters.
pub fn char_len(text: &str) -> usize {
  text.graphemes(true).count()
}

/// A query after normalization, ready to be matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedQuery {
  /// The trimmed, lower-cased query as a whole.
  pub phrase: String,
  /// `phrase` split on whitespace.
  pub words: Vec<String>,
}

impl NormalizedQuery {
  pub fn new(raw: &str) -> Self {
    let phrase = normalize(raw);
    let words = tokenize(&phrase);
    Self { phrase, words }
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }
}
