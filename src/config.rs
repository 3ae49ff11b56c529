//! Configuration for [`Ranker`](crate::Ranker).
//!
//! `RankConfig` is plain data: no I/O and no environment lookups, so a ranker
//! is a pure function of `(reference, candidates, config)`. Host applications
//! that keep their settings in JSON can embed the config and load it with
//! [`RankConfig::from_json`].

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Current configuration schema version.
pub const RANK_CONFIG_VERSION: u32 = 1;

/// Tuning knobs for a [`Ranker`](crate::Ranker).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankConfig {
    /// Configuration schema version.
    #[serde(default = "RankConfig::default_version")]
    pub version: u32,
    /// Maximum number of results to return.
    #[serde(default = "RankConfig::default_top_n")]
    pub top_n: usize,
    /// Optional lower bound on similarity.
    ///
    /// When set, results scoring below the bound (and every NaN result) are
    /// dropped before truncation to `top_n`.
    #[serde(default)]
    pub min_similarity: Option<f64>,
}

impl RankConfig {
    pub(crate) fn default_version() -> u32 {
        RANK_CONFIG_VERSION
    }

    pub(crate) fn default_top_n() -> usize {
        10
    }

    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of results to keep.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Set or clear the similarity floor.
    pub fn with_min_similarity(mut self, min_similarity: Option<f64>) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    /// Parse a JSON document and validate it. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: RankConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != RANK_CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(self.version));
        }
        if let Some(floor) = self.min_similarity {
            if !floor.is_finite() || !(-1.0..=1.0).contains(&floor) {
                return Err(ConfigError::InvalidMinSimilarity(floor));
            }
        }
        Ok(())
    }
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            top_n: Self::default_top_n(),
            min_similarity: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = RankConfig::default();
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.top_n, 10);
        assert!(cfg.min_similarity.is_none());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = RankConfig::new()
            .with_top_n(3)
            .with_min_similarity(Some(0.25));
        assert_eq!(cfg.top_n, 3);
        assert_eq!(cfg.min_similarity, Some(0.25));
    }

    #[test]
    fn zero_top_n_is_allowed() {
        assert!(RankConfig::new().with_top_n(0).validate().is_ok());
    }

    #[test]
    fn rejects_out_of_range_floor() {
        for floor in [1.5, -1.01, f64::NAN, f64::INFINITY] {
            let cfg = RankConfig::new().with_min_similarity(Some(floor));
            assert!(matches!(
                cfg.validate(),
                Err(ConfigError::InvalidMinSimilarity(_))
            ));
        }
    }

    #[test]
    fn accepts_boundary_floors() {
        for floor in [-1.0, 0.0, 1.0] {
            let cfg = RankConfig::new().with_min_similarity(Some(floor));
            assert!(cfg.validate().is_ok());
        }
    }

    #[test]
    fn rejects_unknown_version() {
        let cfg = RankConfig {
            version: 2,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::UnsupportedVersion(2))
        ));
    }

    #[test]
    fn from_json_fills_defaults() {
        let cfg = RankConfig::from_json(r#"{ "top_n": 2 }"#).expect("valid json");
        assert_eq!(cfg.version, 1);
        assert_eq!(cfg.top_n, 2);
        assert!(cfg.min_similarity.is_none());
    }

    #[test]
    fn from_json_validates() {
        let err = RankConfig::from_json(r#"{ "min_similarity": 3.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidMinSimilarity(_)));

        let err = RankConfig::from_json("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn serde_round_trip_preserves_fields() {
        let cfg = RankConfig::new().with_top_n(5).with_min_similarity(Some(0.5));
        let json = serde_json::to_string(&cfg).expect("serialize");
        let back = RankConfig::from_json(&json).expect("deserialize");
        assert_eq!(cfg, back);
    }
}
