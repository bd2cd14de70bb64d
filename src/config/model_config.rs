//! Random forest hyperparameters from environment variables.

use super::{VarLookup, parse_optional, parse_var};
use crate::application::valuation::ForestParameters;
use anyhow::{Result, bail};

/// Model environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelEnvConfig {
    pub n_trees: usize,
    pub seed: u64,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub features_per_split: Option<usize>,
}

impl Default for ModelEnvConfig {
    fn default() -> Self {
        let params = ForestParameters::default();
        Self {
            n_trees: params.n_trees,
            seed: params.seed,
            max_depth: params.max_depth,
            min_samples_split: params.min_samples_split,
            min_samples_leaf: params.min_samples_leaf,
            features_per_split: params.max_features,
        }
    }
}

impl ModelEnvConfig {
    pub fn from_vars(vars: VarLookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            n_trees: parse_var(vars, "MODEL_N_TREES", defaults.n_trees)?,
            seed: parse_var(vars, "MODEL_SEED", defaults.seed)?,
            max_depth: parse_optional(vars, "MODEL_MAX_DEPTH")?,
            min_samples_split: parse_var(
                vars,
                "MODEL_MIN_SAMPLES_SPLIT",
                defaults.min_samples_split,
            )?,
            min_samples_leaf: parse_var(vars, "MODEL_MIN_SAMPLES_LEAF", defaults.min_samples_leaf)?,
            features_per_split: parse_optional(vars, "MODEL_FEATURES_PER_SPLIT")?,
        };

        if config.n_trees == 0 {
            bail!("MODEL_N_TREES must be at least 1");
        }
        if config.min_samples_leaf == 0 {
            bail!("MODEL_MIN_SAMPLES_LEAF must be at least 1");
        }
        if config.features_per_split == Some(0) {
            bail!("MODEL_FEATURES_PER_SPLIT must be at least 1");
        }
        Ok(config)
    }

    pub fn to_forest_parameters(&self) -> ForestParameters {
        ForestParameters {
            n_trees: self.n_trees,
            max_depth: self.max_depth,
            min_samples_split: self.min_samples_split,
            min_samples_leaf: self.min_samples_leaf,
            max_features: self.features_per_split,
            seed: self.seed,
        }
    }
}
