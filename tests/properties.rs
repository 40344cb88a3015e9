use jumbah_search::prelude::*;
use proptest::prelude::*;
use proptest::sample::Index;
use std::cmp::Ordering;

fn record_strategy() -> impl Strategy<Value = AttractionRecord> {
  (
    "[A-Za-z]{1,8}( [A-Za-z]{1,8}){0,2}",
    "[a-z]{1,10}( [a-z]{1,10}){0,5}",
    "[A-Z][a-z]{2,8}",
  )
    .prop_map(|(name, description, district)| AttractionRecord::new(name, description, district))
}

fn catalog_strategy() -> impl Strategy<Value = Vec<AttractionRecord>> {
  proptest::collection::vec(record_strategy(), 1..8)
}

proptest! {
  #[test]
  fn blank_query_returns_nothing(catalog in catalog_strategy(), blank in "[ \t\n]{0,4}") {
    prop_assert!(search(&blank, &catalog).is_empty());
  }

  #[test]
  fn own_name_is_an_exact_match(catalog in catalog_strategy(), pick in any::<Index>()) {
    let index = pick.index(catalog.len());
    let query = catalog[index].name.to_lowercase();

    let results = search(&query, &catalog);
    let hit = results.iter().find(|m| m.id == index);
    prop_assert!(hit.is_some());
    prop_assert_eq!(hit.unwrap().tier, MatchTier::Exact);
  }

  #[test]
  fn own_words_in_any_order_match_at_least_all_words(
    catalog in catalog_strategy(),
    pick in any::<Index>(),
    word_picks in proptest::collection::vec(any::<Index>(), 1..4),
  ) {
    let index = pick.index(catalog.len());
    let text = catalog[index].searchable_text();
    let words: Vec<&str> = text.split_whitespace().collect();
    let query = word_picks
      .iter()
      .map(|p| words[p.index(words.len())])
      .collect::<Vec<_>>()
      .join(" ");

    let results = search(&query, &catalog);
    let hit = results.iter().find(|m| m.id == index);
    prop_assert!(hit.is_some());
    prop_assert!(hit.unwrap().tier >= MatchTier::AllWords);
  }

  #[test]
  fn search_is_idempotent(catalog in catalog_strategy(), query in "[a-z ]{0,12}") {
    prop_assert_eq!(search(&query, &catalog), search(&query, &catalog));
  }

  #[test]
  fn results_are_ranked_and_unique(catalog in catalog_strategy(), query in "[a-z]{1,6}( [a-z]{1,6}){0,2}") {
    let results = search(&query, &catalog);

    for pair in results.windows(2) {
      let (a, b) = (&pair[0], &pair[1]);
      prop_assert!(a.tier >= b.tier);
      if a.tier == b.tier {
        prop_assert_ne!(compare_names(&a.item.name, &b.item.name), Ordering::Greater);
      }
    }

    let mut ids: Vec<usize> = results.iter().map(|m| m.id).collect();
    ids.sort_unstable();
    ids.dedup();
    prop_assert_eq!(ids.len(), results.len());
  }

  #[test]
  fn similarity_with_itself_is_one(word in "\\PC{0,12}") {
    prop_assert_eq!(similarity(&word, &word), 1.0);
    prop_assert_eq!(edit_distance(&word, &word), 0);
  }

  #[test]
  fn similarity_stays_in_unit_range(a in "[a-z]{0,10}", b in "[a-z]{0,10}") {
    let score = similarity(&a, &b);
    prop_assert!((0.0..=1.0).contains(&score));
    prop_assert_eq!(score, similarity(&b, &a));
  }
}
