//! Dataset location and load policy.

use super::VarLookup;
use crate::infrastructure::dataset_loader::ConsistencyPolicy;
use anyhow::Result;
use std::path::PathBuf;

pub const DEFAULT_DATASET_PATH: &str = "data/furniture_price_dataset.csv";

/// Dataset environment configuration
#[derive(Debug, Clone)]
pub struct DatasetEnvConfig {
    pub path: PathBuf,
    pub consistency: ConsistencyPolicy,
}

impl Default for DatasetEnvConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET_PATH),
            consistency: ConsistencyPolicy::Warn,
        }
    }
}

impl DatasetEnvConfig {
    pub fn from_vars(vars: VarLookup<'_>) -> Result<Self> {
        let path = vars("DATASET_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_PATH));
        let consistency = match vars("DATASET_CONSISTENCY") {
            Some(value) => value.parse::<ConsistencyPolicy>()?,
            None => ConsistencyPolicy::Warn,
        };
        Ok(Self { path, consistency })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::lookup;

    #[test]
    fn test_dataset_config_defaults() {
        let config = DatasetEnvConfig::from_vars(&lookup(&[])).unwrap();
        assert_eq!(config.path, PathBuf::from(DEFAULT_DATASET_PATH));
        assert_eq!(config.consistency, ConsistencyPolicy::Warn);
    }

    #[test]
    fn test_dataset_config_overrides() {
        let config = DatasetEnvConfig::from_vars(&lookup(&[
            ("DATASET_PATH", "/tmp/items.csv"),
            ("DATASET_CONSISTENCY", "reject"),
        ]))
        .unwrap();
        assert_eq!(config.path, PathBuf::from("/tmp/items.csv"));
        assert_eq!(config.consistency, ConsistencyPolicy::Reject);

        assert!(
            DatasetEnvConfig::from_vars(&lookup(&[("DATASET_CONSISTENCY", "maybe")])).is_err()
        );
    }
}
