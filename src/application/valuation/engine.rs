use super::predictor::PricePredictor;
use super::sweep;
use super::trainer::{ForestParameters, train_forest};
use crate::domain::errors::{QueryError, TrainingError};
use crate::domain::valuation::encoding::EncoderBank;
use crate::domain::valuation::query::{PredictionQuery, PredictionTrajectory, ValuationReport};
use crate::domain::valuation::record::{CategoricalAttribute, HistoricalRecord};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Owns the fitted encoders and regression model.
///
/// Built once at startup and read-only afterwards, so a single instance can
/// be shared by reference across any number of queries.
pub struct DepreciationEngine {
    encoders: EncoderBank,
    predictor: Box<dyn PricePredictor>,
    purchase_years: Vec<i32>,
}

impl DepreciationEngine {
    /// Fits encoders and a random forest on the full dataset.
    pub fn train(
        records: &[HistoricalRecord],
        params: &ForestParameters,
    ) -> Result<Self, TrainingError> {
        let encoders = EncoderBank::fit(records)?;
        for attribute in CategoricalAttribute::ALL {
            info!(
                "Encoded {} distinct {} labels",
                encoders.get(attribute).len(),
                attribute
            );
        }

        let predictor = train_forest(records, &encoders, params)?;
        Ok(Self::with_predictor(
            encoders,
            Box::new(predictor),
            Self::distinct_purchase_years(records),
        ))
    }

    /// Assembles an engine around an already fitted model.
    pub fn with_predictor(
        encoders: EncoderBank,
        predictor: Box<dyn PricePredictor>,
        purchase_years: Vec<i32>,
    ) -> Self {
        Self {
            encoders,
            predictor,
            purchase_years,
        }
    }

    fn distinct_purchase_years(records: &[HistoricalRecord]) -> Vec<i32> {
        records
            .iter()
            .map(|record| record.purchase_year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn encoders(&self) -> &EncoderBank {
        &self.encoders
    }

    /// Known labels of `attribute`, for populating choice lists.
    pub fn labels(&self, attribute: CategoricalAttribute) -> &[String] {
        self.encoders.get(attribute).labels()
    }

    /// Sorted distinct purchase years seen in training.
    pub fn purchase_years(&self) -> &[i32] {
        &self.purchase_years
    }

    pub fn model_name(&self) -> &str {
        self.predictor.name()
    }

    pub fn trajectory(&self, query: &PredictionQuery) -> Result<PredictionTrajectory, QueryError> {
        sweep::predict_trajectory(self.predictor.as_ref(), &self.encoders, query)
    }

    pub fn predict_at(&self, query: &PredictionQuery, year: i32) -> Result<f64, QueryError> {
        sweep::predict_at(self.predictor.as_ref(), &self.encoders, query, year)
    }

    /// Point estimate, trajectory and depreciation for one query.
    pub fn estimate(&self, query: PredictionQuery) -> Result<ValuationReport, QueryError> {
        let trajectory = self.trajectory(&query)?;
        let report = ValuationReport::new(query, trajectory);
        debug!(
            "Estimated {} in {}: {:.2} (depreciation {})",
            report.query.furniture_type,
            report.query.target_year,
            report.point_estimate,
            report.depreciation
        );
        Ok(report)
    }
}
