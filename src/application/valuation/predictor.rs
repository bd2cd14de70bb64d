use crate::domain::errors::QueryError;
use crate::domain::valuation::feature_registry::FeatureVector;

/// Interface for price regression models
pub trait PricePredictor: Send + Sync {
    /// Predict the price for a single feature vector
    fn predict(&self, features: &FeatureVector) -> Result<f64, QueryError>;

    /// Predict one price per feature vector, in input order.
    /// Each row is scored independently.
    fn predict_batch(&self, rows: &[FeatureVector]) -> Result<Vec<f64>, QueryError> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Get model name/type
    fn name(&self) -> &str;
}
