//! The attraction catalog: districts, their attractions and stamps, and events.
//!
//! The catalog is plain data. Searching never mutates it; call
//! [`Catalog::attractions`] to get the flat list of records the search runs
//! over.

mod event;

pub use event::Event;

use crate::error::{Error, Result};
use crate::rank::fold_name;
use crate::types::AttractionRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::info;

/// The Sabah dataset shipped with the travel guide.
const SABAH_JSON: &str = include_str!("../../data/sabah.json");

/// Every district of the guide, keyed by display name, plus upcoming events.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
  pub districts: BTreeMap<String, District>,
  #[serde(default)]
  pub events: Vec<Event>,
}

/// A district page: a blurb, its attractions and the stamps collectable there.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct District {
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub background: Option<String>,
  #[serde(default)]
  pub attractions: Vec<Attraction>,
  #[serde(default)]
  pub stamps: Vec<Stamp>,
}

/// An attraction as stored under its district.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
  pub name: String,
  #[serde(alias = "desc", default)]
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image: Option<String>,
  /// Entry price in RM, 0 when free.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<f64>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<f32>,
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

impl Attraction {
  /// The searchable view of this attraction, tagged with its district.
  pub fn to_record(&self, district: &str) -> AttractionRecord {
    AttractionRecord {
      name: self.name.clone(),
      description: self.description.clone(),
      district: district.to_string(),
      category: self.category.clone(),
      kind: self.kind.clone(),
      location: self.location.clone(),
      activities: self.activities.clone(),
      tags: self.tags.clone(),
    }
  }
}

/// A collectible check-in stamp tied to an attraction by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stamp {
  pub id: String,
  pub name: String,
  pub location: String,
}

/// Simple aggregate counts for a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
  pub districts: usize,
  pub attractions: usize,
  pub stamps: usize,
  pub events: usize,
}

impl Catalog {
  /// The built-in Sabah catalog.
  pub fn sabah() -> Result<Self> {
    Self::from_json_str(SABAH_JSON)
  }

  pub fn from_json_str(json: &str) -> Result<Self> {
    let catalog: Catalog = serde_json::from_str(json)?;
    catalog.log_loaded();
    Ok(catalog)
  }

  pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
    let catalog: Catalog = serde_json::from_reader(reader)?;
    catalog.log_loaded();
    Ok(catalog)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_reader(BufReader::new(file))
  }

  fn log_loaded(&self) {
    let stats = self.stats();
    info!(
      districts = stats.districts,
      attractions = stats.attractions,
      events = stats.events,
      "catalog loaded"
    );
  }

  /// Every attraction flattened into one list, each carrying its district.
  pub fn attractions(&self) -> Vec<AttractionRecord> {
    self
      .districts
      .iter()
      .flat_map(|(name, district)| {
        district
          .attractions
          .iter()
          .map(move |attraction| attraction.to_record(name))
      })
      .collect()
  }

  /// Looks a district up by display name or URL slug, ignoring case and
  /// accents: `"kota-kinabalu"` finds `"Kota Kinabalu"`.
  pub fn district(&self, name_or_slug: &str) -> Option<(&str, &District)> {
    let wanted = fold_name(&name_or_slug.trim().replace('-', " "));
    self
      .districts
      .iter()
      .find(|(name, _)| fold_name(name) == wanted)
      .map(|(name, district)| (name.as_str(), district))
  }

  /// Stamps collectable at the named attraction.
  pub fn stamps_at(&self, attraction: &str) -> Vec<&Stamp> {
    let wanted = fold_name(attraction.trim());
    self
      .districts
      .values()
      .flat_map(|district| district.stamps.iter())
      .filter(|stamp| fold_name(&stamp.location) == wanted)
      .collect()
  }

  pub fn stats(&self) -> CatalogStats {
    CatalogStats {
      districts: self.districts.len(),
      attractions: self.districts.values().map(|d| d.attractions.len()).sum(),
      stamps: self.districts.values().map(|d| d.stamps.len()).sum(),
      events: self.events.len(),
    }
  }
}
