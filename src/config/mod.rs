//! Configuration module for the furniture price estimator.
//!
//! Structured configuration loaded from environment variables, organized by
//! concern: Dataset, Model and Form.

mod dataset_config;
mod form_config;
mod model_config;

pub use dataset_config::{DEFAULT_DATASET_PATH, DatasetEnvConfig};
pub use form_config::FormEnvConfig;
pub use model_config::ModelEnvConfig;

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Variable source: returns the raw value for a key, if set.
pub type VarLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub(crate) fn parse_var<T>(vars: VarLookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match vars(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}

pub(crate) fn parse_optional<T>(vars: VarLookup<'_>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    vars(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Failed to parse {}", key))
        })
        .transpose()
}

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset: DatasetEnvConfig,
    pub model: ModelEnvConfig,
    pub form: FormEnvConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    pub fn from_vars(vars: VarLookup<'_>) -> Result<Self> {
        Ok(Self {
            dataset: DatasetEnvConfig::from_vars(vars).context("Failed to load dataset config")?,
            model: ModelEnvConfig::from_vars(vars).context("Failed to load model config")?,
            form: FormEnvConfig::from_vars(vars).context("Failed to load form config")?,
        })
    }
}
