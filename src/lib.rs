//! JumBah search - tiered attraction search for the Sabah travel guide.
//!
//! A free-text query is matched against a catalog of attractions in four
//! tiers (whole phrase, all words, word prefixes, fuzzy edit distance) and
//! the matches are ranked by tier, then by name.
//!
//! ```rust
//! use jumbah_search::prelude::*;
//!
//! let catalog = Catalog::sabah().unwrap().attractions();
//! let results = search("moutn kinablu", &catalog);
//!
//! let top = &results[0];
//! assert_eq!(top.tier, MatchTier::Fuzzy);
//! assert_eq!(top.tier.label(), "Partial match");
//! ```

pub mod catalog;
pub mod context;
pub mod engine;
pub mod error;
pub mod rank;
pub mod rules;
pub mod searcher;
pub mod searchers;
pub mod types;

pub use crate::error::{Error, Result};

pub mod prelude {
  //! Convenient re-exports for common types and traits.

  pub use crate::catalog::{Attraction, Catalog, CatalogStats, District, Event, Stamp};
  pub use crate::context::SearchContext;
  pub use crate::engine::{search, SearchEngine, SearchEngineBuilder};
  pub use crate::error::{Error, Result};
  pub use crate::rank::{compare_names, rank};
  pub use crate::rules::{TierRules, TierRulesBuilder};
  pub use crate::searcher::Searcher;
  pub use crate::searchers::{edit_distance, normalize, similarity, tokenize, NormalizedQuery, TieredSearch};
  pub use crate::types::*;
}
