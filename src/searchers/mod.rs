//! Built-in match strategies and the text helpers they share.
//!
//! - [`TieredSearch`](crate::searchers::TieredSearch): phrase, all-words,
//!   prefix and fuzzy matching with the tier scores the travel guide ranks by.
//!
//! # Example
//!
//! ```rust
//! use jumbah_search::prelude::*;
//!
//! let engine: SearchEngine<AttractionRecord> = SearchEngine::builder()
//!     .with(Box::new(TieredSearch::new()))
//!     .build();
//!
//! let catalog = vec![AttractionRecord::new("Poring Hot Springs", "Sulphur springs", "Ranau")];
//! let results = engine.search(&catalog, &Query::new("porin"));
//! assert_eq!(results[0].tier, MatchTier::Exact);
//! ```

/// Edit-distance similarity.
pub mod similarity;
/// The four-tier match pipeline.
pub mod tiered;
/// Normalization and tokenization.
pub mod tokenizer;

pub use similarity::{edit_distance, similarity};
pub use tiered::TieredSearch;
pub use tokenizer::{normalize, tokenize, NormalizedQuery};
