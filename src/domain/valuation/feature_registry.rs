use super::encoding::EncodedCategories;

/// Ordered list of model input columns.
/// Training rows and prediction rows are both built from this order.
/// Any change here invalidates every trained model.
pub const FEATURE_NAMES: &[&str] = &[
    "Purchase_Year",
    "Original_Price",
    "Furniture_Type",
    "Material",
    "Quality",
    "Color",
    "Condition_Years",
    "Target_Year",
];

/// Numeric model input for one item evaluated at one year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub purchase_year: i32,
    pub original_price: u64,
    pub categories: EncodedCategories,
    pub condition_years: u32,
    pub target_year: i32,
}

impl FeatureVector {
    /// Vector for an item evaluated at `year`; the caller guarantees
    /// `year >= purchase_year`.
    pub fn at_year(
        purchase_year: i32,
        original_price: u64,
        categories: EncodedCategories,
        year: i32,
    ) -> Self {
        Self {
            purchase_year,
            original_price,
            categories,
            condition_years: year.saturating_sub(purchase_year).max(0) as u32,
            target_year: year,
        }
    }

    /// Flattens into an f64 row in `FEATURE_NAMES` order.
    pub fn to_f64_vector(&self) -> Vec<f64> {
        vec![
            f64::from(self.purchase_year),
            self.original_price as f64,
            self.categories.furniture_type as f64,
            self.categories.material as f64,
            self.categories.quality as f64,
            self.categories.color as f64,
            f64::from(self.condition_years),
            f64::from(self.target_year),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> EncodedCategories {
        EncodedCategories {
            furniture_type: 1,
            material: 2,
            quality: 0,
            color: 3,
        }
    }

    #[test]
    fn test_feature_vector_length() {
        let fv = FeatureVector::at_year(2018, 10000, categories(), 2020);
        assert_eq!(fv.to_f64_vector().len(), FEATURE_NAMES.len());
    }

    #[test]
    fn test_feature_order() {
        let fv = FeatureVector::at_year(2018, 10000, categories(), 2021);
        assert_eq!(
            fv.to_f64_vector(),
            vec![2018.0, 10000.0, 1.0, 2.0, 0.0, 3.0, 3.0, 2021.0]
        );
    }

    #[test]
    fn test_condition_years_derived_from_year() {
        let fv = FeatureVector::at_year(2020, 5000, categories(), 2020);
        assert_eq!(fv.condition_years, 0);
        assert_eq!(fv.target_year, 2020);
    }
}
