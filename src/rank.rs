//! Ordering of matched records.

use crate::types::{SearchMatch, SearchRecord};
use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fold a name for comparison: transliterate to ASCII, then lower-case.
///
/// ```rust
/// use jumbah_search::rank::fold_name;
///
/// assert_eq!(fold_name("Kampung Ágnes"), "kampung agnes");
/// ```
pub fn fold_name(name: &str) -> String {
  deunicode::deunicode(name).to_lowercase()
}

/// Compare two names the way a reader would expect an A-Z list to look.
///
/// Case and diacritics are ignored first, so `"apple"` sorts before
/// `"Banana"` and `"Ágnes"` before `"Bohey"`. Names that fold equal fall
/// back to plain byte order so the result is total.
pub fn compare_names(a: &str, b: &str) -> Ordering {
  fold_name(a).cmp(&fold_name(b)).then_with(|| a.cmp(b))
}

/// Sort matches by tier, best first, then by name.
///
/// The sort is stable and keeps every element.
pub fn rank<T: SearchRecord>(mut scored: Vec<SearchMatch<T>>) -> Vec<SearchMatch<T>> {
  sort_matches(&mut scored);
  scored
}

/// In-place variant of [`rank`].
#[cfg(feature = "parallel")]
pub fn sort_matches<T: SearchRecord>(matches: &mut [SearchMatch<T>]) {
  matches.par_sort_by(by_tier_then_name);
}

/// In-place variant of [`rank`].
#[cfg(not(feature = "parallel"))]
pub fn sort_matches<T: SearchRecord>(matches: &mut [SearchMatch<T>]) {
  matches.sort_by(by_tier_then_name);
}

fn by_tier_then_name<T: SearchRecord>(a: &SearchMatch<T>, b: &SearchMatch<T>) -> Ordering {
  b.tier
    .cmp(&a.tier)
    .then_with(|| compare_names(a.item.name(), b.item.name()))
}
