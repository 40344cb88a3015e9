//! Tunable matching policy for the tiered searcher.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Thresholds that decide whether a candidate reaches the prefix or fuzzy tier.
///
/// The defaults reproduce the behaviour the travel guide has always shipped
/// with. They are policy and can be loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierRules {
  /// A fuzzy pair must score strictly above this similarity.
  #[serde(default = "default_fuzzy_threshold")]
  pub fuzzy_threshold: f64,
  /// Query words shorter than this never count as a prefix hit.
  #[serde(default = "default_prefix_min_len")]
  pub prefix_min_len: usize,
  /// Query words shorter than this are never fuzzy matched.
  #[serde(default = "default_fuzzy_min_len")]
  pub fuzzy_min_len: usize,
  /// Fraction of query words that must prefix a searchable word.
  #[serde(default = "default_prefix_quorum")]
  pub prefix_quorum: f64,
}

fn default_fuzzy_threshold() -> f64 {
  0.7
}

fn default_prefix_min_len() -> usize {
  2
}

fn default_fuzzy_min_len() -> usize {
  3
}

fn default_prefix_quorum() -> f64 {
  0.5
}

impl Default for TierRules {
  fn default() -> Self {
    Self {
      fuzzy_threshold: default_fuzzy_threshold(),
      prefix_min_len: default_prefix_min_len(),
      fuzzy_min_len: default_fuzzy_min_len(),
      prefix_quorum: default_prefix_quorum(),
    }
  }
}

impl TierRules {
  /// Create a new rules builder starting from the defaults.
  pub fn builder() -> TierRulesBuilder {
    TierRulesBuilder::default()
  }

  /// Parse and validate rules from JSON. Missing keys take their defaults.
  pub fn from_json_str(json: &str) -> Result<Self> {
    let rules: TierRules = serde_json::from_str(json)?;
    rules.validate()?;
    Ok(rules)
  }

  /// Checks that every threshold lies in its meaningful range.
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
      warn!(threshold = self.fuzzy_threshold, "rejecting fuzzy threshold");
      return Err(Error::InvalidRules(format!(
        "fuzzy_threshold must be within [0, 1], got {}",
        self.fuzzy_threshold
      )));
    }
    if !(self.prefix_quorum > 0.0 && self.prefix_quorum <= 1.0) {
      warn!(quorum = self.prefix_quorum, "rejecting prefix quorum");
      return Err(Error::InvalidRules(format!(
        "prefix_quorum must be within (0, 1], got {}",
        self.prefix_quorum
      )));
    }
    Ok(())
  }

  /// How many prefix hits a query of `word_count` words needs.
  pub fn required_prefix_hits(&self, word_count: usize) -> usize {
    (word_count as f64 * self.prefix_quorum).ceil() as usize
  }
}

/// Builder for tier rules.
#[derive(Debug, Default)]
pub struct TierRulesBuilder {
  rules: TierRules,
}

impl TierRulesBuilder {
  pub fn fuzzy_threshold(mut self, threshold: f64) -> Self {
    self.rules.fuzzy_threshold = threshold;
    self
  }

  pub fn prefix_min_len(mut self, len: usize) -> Self {
    self.rules.prefix_min_len = len;
    self
  }

  pub fn fuzzy_min_len(mut self, len: usize) -> Self {
    self.rules.fuzzy_min_len = len;
    self
  }

  pub fn prefix_quorum(mut self, quorum: f64) -> Self {
    self.rules.prefix_quorum = quorum;
    self
  }

  /// Build and validate the rules.
  pub fn build(self) -> Result<TierRules> {
    self.rules.validate()?;
    Ok(self.rules)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_match_shipped_policy() {
    let rules = TierRules::default();
    assert_eq!(rules.fuzzy_threshold, 0.7);
    assert_eq!(rules.prefix_min_len, 2);
    assert_eq!(rules.fuzzy_min_len, 3);
    assert_eq!(rules.required_prefix_hits(1), 1);
    assert_eq!(rules.required_prefix_hits(2), 1);
    assert_eq!(rules.required_prefix_hits(3), 2);
    assert_eq!(rules.required_prefix_hits(4), 2);
  }

  #[test]
  fn partial_json_keeps_defaults() {
    let rules = TierRules::from_json_str(r#"{ "fuzzy_threshold": 0.8 }"#).unwrap();
    assert_eq!(rules.fuzzy_threshold, 0.8);
    assert_eq!(rules.fuzzy_min_len, 3);
  }

  #[test]
  fn out_of_range_values_are_rejected() {
    assert!(matches!(
      TierRules::from_json_str(r#"{ "fuzzy_threshold": 1.5 }"#),
      Err(Error::InvalidRules(_))
    ));
    assert!(TierRules::builder().prefix_quorum(0.0).build().is_err());
    assert!(matches!(
      TierRules::from_json_str("not json"),
      Err(Error::Json(_))
    ));
  }
}
