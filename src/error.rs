//! Error types for catalog and rule loading.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures while loading a catalog or matching rules. Searching itself
/// cannot fail.
#[derive(Error, Debug)]
pub enum Error {
  #[error("Failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("Invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Invalid rules: {0}")]
  InvalidRules(String),
}
