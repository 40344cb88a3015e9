use jumbah_search::prelude::*;

/// Admits every attraction in one district at a fixed tier.
struct DistrictSearcher {
  district: String,
  tier: MatchTier,
}

impl DistrictSearcher {
  fn new(district: &str, tier: MatchTier) -> Self {
    Self {
      district: district.to_string(),
      tier,
    }
  }
}

impl Searcher<AttractionRecord> for DistrictSearcher {
  fn kind(&self) -> SearcherKind {
    SearcherKind::Custom
  }

  fn search(&self, context: &SearchContext<AttractionRecord>) -> Vec<SearchMatch<AttractionRecord>> {
    context
      .items
      .iter()
      .enumerate()
      .filter(|(_, item)| item.district == self.district)
      .map(|(index, item)| SearchMatch::new(item.clone(), self.tier, index))
      .collect()
  }
}

fn catalog() -> Vec<AttractionRecord> {
  vec![
    AttractionRecord::new("Tawau Hills Park", "Rainforest park with waterfalls", "Tawau"),
    AttractionRecord::new("Teck Guan Cocoa Museum", "Chocolate tasting", "Tawau"),
    AttractionRecord::new("Pulau Sipadan", "Top diving spot", "Semporna"),
  ]
}

#[test]
fn test_custom_searcher() {
  let engine = SearchEngine::builder()
    .with(Box::new(DistrictSearcher::new("Tawau", MatchTier::Prefix)))
    .build();

  let results = engine.search(&catalog(), &Query::new("anything"));

  assert_eq!(results.len(), 2);
  assert_eq!(results[0].item.name, "Tawau Hills Park");
  assert_eq!(results[1].item.name, "Teck Guan Cocoa Museum");
}

#[test]
fn test_merge_keeps_best_tier_once() {
  let engine = SearchEngine::builder()
    .with(Box::new(TieredSearch::new()))
    .with(Box::new(DistrictSearcher::new("Tawau", MatchTier::Fuzzy)))
    .build();

  // "chocolate" is an exact hit for the museum; the custom searcher also
  // reports it at the fuzzy tier.
  let results = engine.search(&catalog(), &Query::new("chocolate"));

  let museum: Vec<_> = results
    .iter()
    .filter(|m| m.item.name == "Teck Guan Cocoa Museum")
    .collect();
  assert_eq!(museum.len(), 1);
  assert_eq!(museum[0].tier, MatchTier::Exact);

  assert_eq!(results[0].item.name, "Teck Guan Cocoa Museum");
  assert_eq!(results[1].item.name, "Tawau Hills Park");
  assert_eq!(results[1].tier, MatchTier::Fuzzy);
  assert_eq!(results.len(), 2);
}

#[test]
fn test_engine_without_searchers_finds_nothing() {
  let engine: SearchEngine<AttractionRecord> = SearchEngine::builder().build();
  assert!(engine.search(&catalog(), &Query::new("tawau")).is_empty());
}

#[test]
fn test_blank_query_skips_custom_searchers() {
  let engine = SearchEngine::builder()
    .with(Box::new(DistrictSearcher::new("Tawau", MatchTier::Exact)))
    .build();
  assert!(engine.search(&catalog(), &Query::new("   ")).is_empty());
}
