use anyhow::{Context, Result};
use tracing::info;

use crate::application::valuation::{DepreciationEngine, ForestParameters};
use crate::config::Config;
use crate::domain::ports::DatasetSource;
use crate::infrastructure::dataset_loader::CsvDatasetLoader;

/// Startup sequence: load the dataset once, then fit encoders and model.
/// Any failure here aborts startup; no partially trained engine escapes.
pub struct EngineBootstrap;

impl EngineBootstrap {
    pub fn init(config: &Config) -> Result<DepreciationEngine> {
        let loader = CsvDatasetLoader::new(&config.dataset.path, config.dataset.consistency);
        Self::from_source(&loader, &config.model.to_forest_parameters())
    }

    pub fn from_source(
        source: &dyn DatasetSource,
        params: &ForestParameters,
    ) -> Result<DepreciationEngine> {
        let records = source
            .load()
            .with_context(|| format!("Failed to load dataset from {}", source.describe()))?;

        let engine =
            DepreciationEngine::train(&records, params).context("Failed to train price model")?;
        info!(
            "{} ready: {} records, purchase years {:?}",
            engine.model_name(),
            records.len(),
            engine.purchase_years()
        );
        Ok(engine)
    }
}
