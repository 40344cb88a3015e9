//! Festivals and happenings listed alongside the attractions.

use crate::searchers::tokenizer::compose;
use crate::types::SearchRecord;
use serde::{Deserialize, Serialize};

/// An upcoming festival or happening.
///
/// Events are searched with the same tiers as attractions; their title is the
/// ranking name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
  pub id: u32,
  pub title: String,
  pub date: String,
  pub location: String,
  pub description: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub history: Option<String>,
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub activities: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub price: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub dress_code: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exact_location: Option<String>,
}

impl SearchRecord for Event {
  fn name(&self) -> &str {
    &self.title
  }

  fn searchable_text(&self) -> String {
    let activities = self.activities.join(" ");
    compose([
      self.title.as_str(),
      self.description.as_str(),
      self.location.as_str(),
      self.date.as_str(),
      self.history.as_deref().unwrap_or(""),
      activities.as_str(),
      self.price.as_deref().unwrap_or(""),
      self.dress_code.as_deref().unwrap_or(""),
      self.exact_location.as_deref().unwrap_or(""),
    ])
  }
}
