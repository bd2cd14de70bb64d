use serde::Serialize;
use std::fmt;

/// A user request: an item bought in `purchase_year` for `original_price`,
/// to be valued in `target_year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredictionQuery {
    pub purchase_year: i32,
    pub target_year: i32,
    pub original_price: u64,
    pub furniture_type: String,
    pub material: String,
    pub quality: String,
    pub color: String,
}

impl PredictionQuery {
    /// Elapsed years between purchase and target; negative for an invalid range.
    pub fn condition_years(&self) -> i64 {
        i64::from(self.target_year) - i64::from(self.purchase_year)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub year: i32,
    pub price: f64,
}

/// Year-by-year price estimates from purchase year to target year inclusive.
///
/// Never empty: the first point is always the purchase year at the original
/// price. Later points are raw model output and are not forced to decrease.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PredictionTrajectory {
    points: Vec<TrajectoryPoint>,
}

impl PredictionTrajectory {
    pub(crate) fn from_points(points: Vec<TrajectoryPoint>) -> Self {
        debug_assert!(!points.is_empty(), "trajectory must hold the purchase year");
        Self { points }
    }

    pub fn points(&self) -> &[TrajectoryPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> &TrajectoryPoint {
        &self.points[0]
    }

    pub fn last(&self) -> &TrajectoryPoint {
        &self.points[self.points.len() - 1]
    }

    /// Estimated price for the query's target year.
    pub fn point_estimate(&self) -> f64 {
        self.last().price
    }

    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.points.iter().map(|p| p.year)
    }

    pub fn depreciation(&self) -> Depreciation {
        Depreciation::between(self.first().price, self.last().price)
    }
}

/// Percentage drop from the first to the last trajectory price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Depreciation {
    Percent(f64),
    /// The starting price is zero, so a relative drop has no meaning.
    NotApplicable,
}

impl Depreciation {
    /// `round((initial - current) / initial * 100, 2)`, rounding the exact
    /// binary value with ties to even.
    pub fn between(initial: f64, current: f64) -> Self {
        if initial == 0.0 {
            return Depreciation::NotApplicable;
        }
        let pct = (initial - current) / initial * 100.0;
        if !pct.is_finite() {
            return Depreciation::NotApplicable;
        }
        // Float formatting rounds the exact value, unlike scaling by 100 first.
        match format!("{:.2}", pct).parse::<f64>() {
            Ok(rounded) => Depreciation::Percent(rounded),
            Err(_) => Depreciation::NotApplicable,
        }
    }

    pub fn percent(&self) -> Option<f64> {
        match self {
            Depreciation::Percent(pct) => Some(*pct),
            Depreciation::NotApplicable => None,
        }
    }
}

impl fmt::Display for Depreciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Depreciation::Percent(pct) => write!(f, "{}%", pct),
            Depreciation::NotApplicable => f.write_str("not applicable"),
        }
    }
}

/// Everything the presentation layer needs for one answered query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValuationReport {
    pub query: PredictionQuery,
    pub point_estimate: f64,
    pub trajectory: PredictionTrajectory,
    pub depreciation: Depreciation,
}

impl ValuationReport {
    pub fn new(query: PredictionQuery, trajectory: PredictionTrajectory) -> Self {
        Self {
            point_estimate: trajectory.point_estimate(),
            depreciation: trajectory.depreciation(),
            query,
            trajectory,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trajectory(prices: &[f64]) -> PredictionTrajectory {
        PredictionTrajectory::from_points(
            prices
                .iter()
                .enumerate()
                .map(|(i, &price)| TrajectoryPoint {
                    year: 2018 + i as i32,
                    price,
                })
                .collect(),
        )
    }

    #[test]
    fn test_condition_years_can_be_negative() {
        let query = PredictionQuery {
            purchase_year: 2025,
            target_year: 2024,
            original_price: 1000,
            furniture_type: "Chair".to_string(),
            material: "Wood".to_string(),
            quality: "High".to_string(),
            color: "Brown".to_string(),
        };
        assert_eq!(query.condition_years(), -1);
    }

    #[test]
    fn test_depreciation_rounds_to_two_places() {
        assert_eq!(Depreciation::between(30000.0, 20000.0), Depreciation::Percent(33.33));
        assert_eq!(Depreciation::between(25000.0, 12500.0), Depreciation::Percent(50.0));
    }

    #[test]
    fn test_depreciation_rounds_exact_value_half_to_even() {
        // 17.845 is stored just below the tie, so it rounds down.
        assert_eq!(Depreciation::between(10000.0, 8215.5), Depreciation::Percent(17.84));
        assert_eq!(Depreciation::between(1000.0, 1000.0), Depreciation::Percent(0.0));
        assert_eq!(Depreciation::between(800.0, 900.0), Depreciation::Percent(-12.5));
    }

    #[test]
    fn test_depreciation_can_be_negative() {
        // Appreciation is reported as a negative drop, not clamped.
        assert_eq!(Depreciation::between(1000.0, 1100.0), Depreciation::Percent(-10.0));
    }

    #[test]
    fn test_zero_price_is_not_applicable() {
        let dep = Depreciation::between(0.0, 500.0);
        assert_eq!(dep, Depreciation::NotApplicable);
        assert_eq!(dep.percent(), None);
        assert_eq!(dep.to_string(), "not applicable");
    }

    #[test]
    fn test_trajectory_accessors() {
        let t = trajectory(&[10000.0, 9100.0, 9300.0]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.first().year, 2018);
        assert_eq!(t.last().year, 2020);
        assert_eq!(t.point_estimate(), 9300.0);
        assert_eq!(t.years().collect::<Vec<_>>(), vec![2018, 2019, 2020]);
        assert_eq!(t.depreciation(), Depreciation::Percent(7.0));
    }

    #[test]
    fn test_report_serializes_not_applicable() {
        let query = PredictionQuery {
            purchase_year: 2018,
            target_year: 2018,
            original_price: 0,
            furniture_type: "Chair".to_string(),
            material: "Wood".to_string(),
            quality: "High".to_string(),
            color: "Brown".to_string(),
        };
        let report = ValuationReport::new(query, trajectory(&[0.0]));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["depreciation"], "not_applicable");
        assert_eq!(json["trajectory"][0]["year"], 2018);
    }
}
