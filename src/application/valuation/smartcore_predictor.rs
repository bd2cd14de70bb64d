use super::predictor::PricePredictor;
use super::trainer::ForestParameters;
use crate::domain::errors::{QueryError, TrainingError};
use crate::domain::valuation::feature_registry::FeatureVector;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use tracing::debug;

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Random forest regressor fitted once and queried read-only afterwards.
pub struct SmartCorePredictor {
    model: Forest,
    n_trees: usize,
}

impl SmartCorePredictor {
    /// Fits a forest on `x` (rows in `FEATURE_NAMES` order) against `y`.
    #[allow(clippy::ptr_arg)]
    pub fn fit(
        x: &Vec<Vec<f64>>,
        y: &Vec<f64>,
        params: &ForestParameters,
    ) -> Result<Self, TrainingError> {
        let x_matrix = DenseMatrix::from_2d_vec(x).map_err(|e| TrainingError::ModelFailure {
            reason: format!("Matrix creation failed: {}", e),
        })?;

        let model = Forest::fit(&x_matrix, y, Self::smartcore_parameters(params)).map_err(|e| {
            TrainingError::ModelFailure {
                reason: format!("Training error: {}", e),
            }
        })?;

        Ok(Self {
            model,
            n_trees: params.n_trees,
        })
    }

    fn smartcore_parameters(params: &ForestParameters) -> RandomForestRegressorParameters {
        let mut smartcore_params = RandomForestRegressorParameters::default()
            .with_n_trees(params.n_trees)
            .with_min_samples_split(params.min_samples_split)
            .with_min_samples_leaf(params.min_samples_leaf)
            .with_seed(params.seed);
        if let Some(depth) = params.max_depth {
            smartcore_params = smartcore_params.with_max_depth(depth);
        }
        smartcore_params.with_m(params.features_per_split())
    }

    pub fn n_trees(&self) -> usize {
        self.n_trees
    }
}

impl PricePredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, QueryError> {
        let predictions = self.predict_batch(std::slice::from_ref(features))?;
        predictions
            .first()
            .copied()
            .ok_or_else(|| QueryError::ModelFailure {
                reason: "No prediction returned".to_string(),
            })
    }

    fn predict_batch(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, QueryError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        let input: Vec<Vec<f64>> = rows.iter().map(FeatureVector::to_f64_vector).collect();
        let input_matrix =
            DenseMatrix::from_2d_vec(&input).map_err(|e| QueryError::ModelFailure {
                reason: format!("Matrix creation failed: {}", e),
            })?;

        let predictions: Vec<f64> =
            self.model
                .predict(&input_matrix)
                .map_err(|e| QueryError::ModelFailure {
                    reason: format!("Prediction failed: {}", e),
                })?;
        debug!("Scored {} feature rows", predictions.len());
        Ok(predictions)
    }

    fn name(&self) -> &str {
        "SmartCore Random Forest"
    }
}
