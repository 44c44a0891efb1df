use std::{fs, path::Path};

use serde::Deserialize;

use crate::{RecError, Result};

/// Hyper-parameters of the latent-factor rating predictor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvdConfig {
    pub n_factors: usize,
    pub n_epochs: usize,
    pub lr_all: f32,
    pub reg_all: f32,
    pub init_mean: f32,
    pub init_std_dev: f32,
    /// Inclusive `(low, high)` bounds predictions are clipped into.
    pub rating_scale: (f32, f32),
}

impl Default for SvdConfig {
    fn default() -> Self {
        Self {
            n_factors: 100,
            n_epochs: 20,
            lr_all: 0.005,
            reg_all: 0.02,
            init_mean: 0.,
            init_std_dev: 0.1,
            rating_scale: (1., 5.),
        }
    }
}

/// Top level configuration: synthetic data generation, predictor and blending.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    /// Seed for the rating simulation and factor initialization, `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub num_ratings: usize,
    pub min_rating: u8,
    pub max_rating: u8,
    /// Total amount of recommendations requested from the hybrid blender.
    pub top_n: usize,
    pub svd: SvdConfig,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            seed: None,
            num_ratings: 20,
            min_rating: 3,
            max_rating: 5,
            top_n: 3,
            svd: SvdConfig::default(),
        }
    }
}

impl RecommenderConfig {
    /// Parses and validates a configuration from a JSON string.
    ///
    /// # Errors
    /// `RecError::Json` if the string doesn't match the schema, `RecError::InvalidConfig`
    /// if a value is out of range.
    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a configuration file.
    ///
    /// # Errors
    /// `RecError::Io` if the file cannot be read, otherwise see [`Self::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks the invariants the generator and the predictor rely on.
    ///
    /// # Errors
    /// Returns `RecError::InvalidConfig` describing the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let invalid = |msg: &str| Err(RecError::InvalidConfig(msg.to_string()));

        if self.min_rating > self.max_rating {
            return invalid("min_rating must not exceed max_rating");
        }
        if self.svd.n_factors == 0 {
            return invalid("svd.n_factors must be positive");
        }
        if self.svd.n_epochs == 0 {
            return invalid("svd.n_epochs must be positive");
        }
        if !self.svd.init_std_dev.is_finite() || self.svd.init_std_dev < 0. {
            return invalid("svd.init_std_dev must be finite and non-negative");
        }
        let (low, high) = self.svd.rating_scale;
        if !(low < high) {
            return invalid("svd.rating_scale must be an increasing (low, high) pair");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config = RecommenderConfig::from_json("{}").unwrap();
        assert_eq!(config, RecommenderConfig::default());
    }

    #[test]
    fn partial_svd_section_keeps_other_defaults() {
        let config =
            RecommenderConfig::from_json(r#"{ "seed": 7, "svd": { "n_factors": 4 } }"#).unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.svd.n_factors, 4);
        assert_eq!(config.svd.n_epochs, 20);
        assert_eq!(config.svd.rating_scale, (1., 5.));
    }

    #[test]
    fn rejects_inverted_rating_range() {
        let res = RecommenderConfig::from_json(r#"{ "min_rating": 5, "max_rating": 3 }"#);
        assert!(matches!(res, Err(RecError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_zero_factors() {
        let res = RecommenderConfig::from_json(r#"{ "svd": { "n_factors": 0 } }"#);
        assert!(matches!(res, Err(RecError::InvalidConfig(_))));
    }

    #[test]
    fn malformed_json_is_a_json_error() {
        let res = RecommenderConfig::from_json("{ seed: }");
        assert!(matches!(res, Err(RecError::Json(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let res = RecommenderConfig::load("does/not/exist.json");
        assert!(matches!(res, Err(RecError::Io(_))));
    }
}
