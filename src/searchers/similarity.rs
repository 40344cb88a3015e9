//! Edit-distance similarity between two tokens.
//!
//! Both measures work on grapheme clusters, so a precomposed and a decomposed
//! accented letter each count as one character.

use strsim::generic_levenshtein;
use unicode_segmentation::UnicodeSegmentation;

/// Levenshtein distance: the minimum number of single-character insertions,
/// deletions and substitutions that turn `a` into `b`.
pub fn edit_distance(a: &str, b: &str) -> usize {
  let a: Vec<&str> = a.graphemes(true).collect();
  let b: Vec<&str> = b.graphemes(true).collect();
  generic_levenshtein(&a, &b)
}

/// Normalized similarity in `[0, 1]`:
/// `(max_len - edit_distance) / max_len`, or `1.0` when both are empty.
pub fn similarity(a: &str, b: &str) -> f64 {
  let a_graphemes: Vec<&str> = a.graphemes(true).collect();
  let b_graphemes: Vec<&str> = b.graphemes(true).collect();
  let max_len = a_graphemes.len().max(b_graphemes.len());
  if max_len == 0 {
    return 1.0;
  }

  let distance = generic_levenshtein(&a_graphemes, &b_graphemes);
  (max_len - distance) as f64 / max_len as f64
}
