//! Year-by-year prediction sweep.
//!
//! The model is queried once for every year after the purchase year, each
//! year treated as its own target. Output is kept as the model produced it,
//! including any rises in price.

use super::predictor::PricePredictor;
use crate::domain::errors::QueryError;
use crate::domain::valuation::encoding::{EncodedCategories, EncoderBank};
use crate::domain::valuation::feature_registry::FeatureVector;
use crate::domain::valuation::query::{PredictionQuery, PredictionTrajectory, TrajectoryPoint};
use tracing::debug;

fn ensure_ordered(purchase_year: i32, target_year: i32) -> Result<(), QueryError> {
    if target_year < purchase_year {
        return Err(QueryError::InvalidRange {
            purchase_year,
            target_year,
        });
    }
    Ok(())
}

fn encode_query(encoders: &EncoderBank, query: &PredictionQuery) -> Result<EncodedCategories, QueryError> {
    encoders.encode_labels(
        &query.furniture_type,
        &query.material,
        &query.quality,
        &query.color,
    )
}

/// Price trajectory from `query.purchase_year` to `query.target_year` inclusive.
pub fn predict_trajectory(
    predictor: &dyn PricePredictor,
    encoders: &EncoderBank,
    query: &PredictionQuery,
) -> Result<PredictionTrajectory, QueryError> {
    ensure_ordered(query.purchase_year, query.target_year)?;
    let categories = encode_query(encoders, query)?;

    // Skipping the purchase year avoids `purchase_year + 1` overflowing at i32::MAX.
    let later_years = (query.purchase_year..=query.target_year).skip(1);
    let rows: Vec<FeatureVector> = later_years
        .clone()
        .map(|year| {
            FeatureVector::at_year(query.purchase_year, query.original_price, categories, year)
        })
        .collect();
    let prices = predictor.predict_batch(&rows)?;
    if prices.len() != rows.len() {
        return Err(QueryError::ModelFailure {
            reason: format!("expected {} predictions, got {}", rows.len(), prices.len()),
        });
    }

    let mut points = Vec::with_capacity(rows.len() + 1);
    // Zero elapsed years: the purchase price is known, not estimated.
    points.push(TrajectoryPoint {
        year: query.purchase_year,
        price: query.original_price as f64,
    });
    points.extend(
        later_years
            .zip(prices)
            .map(|(year, price)| TrajectoryPoint { year, price }),
    );

    debug!(
        "Swept {} years for {} ({} -> {})",
        points.len(),
        query.furniture_type,
        query.purchase_year,
        query.target_year
    );
    Ok(PredictionTrajectory::from_points(points))
}

/// Price of the queried item at a single `year` on or after the purchase year.
pub fn predict_at(
    predictor: &dyn PricePredictor,
    encoders: &EncoderBank,
    query: &PredictionQuery,
    year: i32,
) -> Result<f64, QueryError> {
    ensure_ordered(query.purchase_year, query.target_year)?;
    ensure_ordered(query.purchase_year, year)?;
    let categories = encode_query(encoders, query)?;

    if year == query.purchase_year {
        return Ok(query.original_price as f64);
    }
    predictor.predict(&FeatureVector::at_year(
        query.purchase_year,
        query.original_price,
        categories,
        year,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::record::HistoricalRecord;
    use std::sync::Mutex;

    /// Records every row it scores and answers with a scripted curve.
    struct ScriptedPredictor {
        seen: Mutex<Vec<FeatureVector>>,
    }

    impl ScriptedPredictor {
        fn new() -> Self {
            Self {
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl PricePredictor for ScriptedPredictor {
        fn predict(&self, features: &FeatureVector) -> Result<f64, QueryError> {
            self.seen.lock().unwrap().push(*features);
            // Dips then rises: 1 year -> 800, 2 years -> 600, 3 years -> 700.
            Ok(match features.condition_years {
                1 => 800.0,
                2 => 600.0,
                _ => 700.0,
            })
        }

        fn name(&self) -> &str {
            "scripted"
        }
    }

    fn encoders() -> EncoderBank {
        let record = |furniture_type: &str| HistoricalRecord {
            furniture_type: furniture_type.to_string(),
            material: "Wood".to_string(),
            quality: "High".to_string(),
            color: "Brown".to_string(),
            purchase_year: 2018,
            original_price: 1000,
            condition_years: 1,
            target_year: 2019,
            predicted_price: 800,
        };
        EncoderBank::fit(&[record("Chair"), record("Table")]).unwrap()
    }

    fn query(purchase_year: i32, target_year: i32) -> PredictionQuery {
        PredictionQuery {
            purchase_year,
            target_year,
            original_price: 1000,
            furniture_type: "Table".to_string(),
            material: "Wood".to_string(),
            quality: "High".to_string(),
            color: "Brown".to_string(),
        }
    }

    #[test]
    fn test_each_year_queried_as_its_own_target() {
        let predictor = ScriptedPredictor::new();
        let trajectory = predict_trajectory(&predictor, &encoders(), &query(2018, 2021)).unwrap();

        let seen = predictor.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        for (offset, row) in seen.iter().enumerate() {
            let year = 2019 + offset as i32;
            assert_eq!(row.target_year, year);
            assert_eq!(row.condition_years, (year - 2018) as u32);
            assert_eq!(row.purchase_year, 2018);
            assert_eq!(row.original_price, 1000);
            assert_eq!(row.categories.furniture_type, 1);
        }
        assert_eq!(trajectory.len(), 4);
    }

    #[test]
    fn test_non_monotonic_output_kept() {
        let predictor = ScriptedPredictor::new();
        let trajectory = predict_trajectory(&predictor, &encoders(), &query(2018, 2021)).unwrap();
        let prices: Vec<f64> = trajectory.points().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![1000.0, 800.0, 600.0, 700.0]);
        assert_eq!(trajectory.point_estimate(), 700.0);
    }

    #[test]
    fn test_same_year_skips_model() {
        let predictor = ScriptedPredictor::new();
        let trajectory = predict_trajectory(&predictor, &encoders(), &query(2020, 2020)).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.first().price, 1000.0);
        assert!(predictor.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_range_skips_model() {
        let predictor = ScriptedPredictor::new();
        let err = predict_trajectory(&predictor, &encoders(), &query(2025, 2024)).unwrap_err();
        assert_eq!(
            err,
            QueryError::InvalidRange {
                purchase_year: 2025,
                target_year: 2024,
            }
        );
        assert!(predictor.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_range_wins_over_other_bad_inputs() {
        let predictor = ScriptedPredictor::new();
        let mut q = query(2025, 2024);
        q.original_price = 0;
        q.furniture_type = "Sofa".to_string();

        assert_eq!(
            predict_trajectory(&predictor, &encoders(), &q).unwrap_err(),
            QueryError::InvalidRange {
                purchase_year: 2025,
                target_year: 2024,
            }
        );
        assert!(matches!(
            predict_at(&predictor, &encoders(), &q, 2026),
            Err(QueryError::InvalidRange { .. })
        ));
        assert!(predictor.seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_sweep_at_largest_year_does_not_overflow() {
        let predictor = ScriptedPredictor::new();
        let trajectory =
            predict_trajectory(&predictor, &encoders(), &query(i32::MAX, i32::MAX)).unwrap();
        assert_eq!(trajectory.len(), 1);
        assert_eq!(trajectory.first().year, i32::MAX);
        assert!(predictor.seen.lock().unwrap().is_empty());

        let trajectory =
            predict_trajectory(&predictor, &encoders(), &query(i32::MAX - 1, i32::MAX)).unwrap();
        assert_eq!(trajectory.len(), 2);
        assert_eq!(trajectory.last().year, i32::MAX);
    }

    #[test]
    fn test_unknown_category_rejected() {
        let predictor = ScriptedPredictor::new();
        let mut q = query(2018, 2020);
        q.furniture_type = "Sofa".to_string();
        assert!(matches!(
            predict_trajectory(&predictor, &encoders(), &q),
            Err(QueryError::UnknownCategory { .. })
        ));
    }

    #[test]
    fn test_predict_at_matches_trajectory() {
        let predictor = ScriptedPredictor::new();
        let encoders = encoders();
        let q = query(2018, 2021);
        let trajectory = predict_trajectory(&predictor, &encoders, &q).unwrap();

        for point in trajectory.points() {
            let price = predict_at(&predictor, &encoders, &q, point.year).unwrap();
            assert_eq!(price, point.price);
        }
        assert!(matches!(
            predict_at(&predictor, &encoders, &q, 2017),
            Err(QueryError::InvalidRange { .. })
        ));
    }
}
