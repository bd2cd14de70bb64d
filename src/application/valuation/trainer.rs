use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::TrainingError;
use crate::domain::valuation::encoding::EncoderBank;
use crate::domain::valuation::feature_registry::{FEATURE_NAMES, FeatureVector};
use crate::domain::valuation::record::HistoricalRecord;
use tracing::info;

/// Random forest hyperparameters.
///
/// Defaults mirror the reference regressor: 100 trees, unlimited depth,
/// every column considered at each split and a fixed seed of 42.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForestParameters {
    pub n_trees: usize,
    pub max_depth: Option<u16>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    /// Columns sampled per split; `None` means all of them.
    pub max_features: Option<usize>,
    pub seed: u64,
}

impl Default for ForestParameters {
    fn default() -> Self {
        Self {
            n_trees: 100,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: None,
            seed: 42,
        }
    }
}

impl ForestParameters {
    pub fn features_per_split(&self) -> usize {
        self.max_features
            .unwrap_or(FEATURE_NAMES.len())
            .clamp(1, FEATURE_NAMES.len())
    }
}

/// Maps every record to a feature row and its observed price label.
pub fn build_training_matrix(
    records: &[HistoricalRecord],
    encoders: &EncoderBank,
) -> Result<(Vec<Vec<f64>>, Vec<f64>), TrainingError> {
    let mut x = Vec::with_capacity(records.len());
    let mut y = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let categories =
            encoders
                .encode_record(record)
                .map_err(|e| TrainingError::UnencodableRecord {
                    index,
                    reason: e.to_string(),
                })?;

        // Historical rows keep their recorded condition/target years as-is.
        let features = FeatureVector {
            purchase_year: record.purchase_year,
            original_price: record.original_price,
            categories,
            condition_years: record.condition_years,
            target_year: record.target_year,
        };
        x.push(features.to_f64_vector());
        y.push(record.predicted_price as f64);
    }

    Ok((x, y))
}

/// Fits the regression model on the full dataset.
pub fn train_forest(
    records: &[HistoricalRecord],
    encoders: &EncoderBank,
    params: &ForestParameters,
) -> Result<SmartCorePredictor, TrainingError> {
    if records.is_empty() {
        return Err(TrainingError::InsufficientData {
            reason: "dataset has no rows".to_string(),
        });
    }
    if params.n_trees == 0 {
        return Err(TrainingError::ModelFailure {
            reason: "forest needs at least one tree".to_string(),
        });
    }

    let (x, y) = build_training_matrix(records, encoders)?;

    info!(
        "Training Random Forest Regressor on {} samples (Trees: {}, Depth: {:?}, MinSplit: {}, MinLeaf: {}, Features/split: {}, Seed: {})...",
        x.len(),
        params.n_trees,
        params.max_depth,
        params.min_samples_split,
        params.min_samples_leaf,
        params.features_per_split(),
        params.seed
    );

    let predictor = SmartCorePredictor::fit(&x, &y, params)?;
    info!("Model trained.");
    Ok(predictor)
}
