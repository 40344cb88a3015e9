//! Search the built-in Sabah catalog from the command line.
//!
//! ```text
//! RUST_LOG=jumbah_search=debug cargo run --example search_sabah -- moutn kinablu
//! ```

use jumbah_search::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .init();

  let query = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
  let catalog = Catalog::sabah()?;
  let records = catalog.attractions();

  println!("=== Searching {} attractions for {:?} ===\n", records.len(), query);

  let results = search(&query, &records);
  if results.is_empty() {
    println!("No results found.");
    return Ok(());
  }

  for result in &results {
    println!(
      "[{:>3}] {:<14} {} ({})",
      result.search_score(),
      result.tier.label(),
      result.item.name,
      result.item.district
    );
    println!("      {}", result.item.description);
    for stamp in catalog.stamps_at(&result.item.name) {
      println!("      stamp: {}", stamp.name);
    }
  }

  Ok(())
}
