use serde::Serialize;
use std::fmt;

/// The four categorical attributes of a furniture item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum CategoricalAttribute {
    FurnitureType,
    Material,
    Quality,
    Color,
}

impl CategoricalAttribute {
    /// All attributes, in feature-vector column order.
    pub const ALL: [CategoricalAttribute; 4] = [
        CategoricalAttribute::FurnitureType,
        CategoricalAttribute::Material,
        CategoricalAttribute::Quality,
        CategoricalAttribute::Color,
    ];

    /// Header of the dataset column holding this attribute.
    pub fn column_name(&self) -> &'static str {
        match self {
            CategoricalAttribute::FurnitureType => "Furniture_Type",
            CategoricalAttribute::Material => "Material",
            CategoricalAttribute::Quality => "Quality",
            CategoricalAttribute::Color => "Color",
        }
    }
}

impl fmt::Display for CategoricalAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CategoricalAttribute::FurnitureType => "furniture type",
            CategoricalAttribute::Material => "material",
            CategoricalAttribute::Quality => "quality",
            CategoricalAttribute::Color => "color",
        };
        f.write_str(label)
    }
}

/// One normalized row of the historical price dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoricalRecord {
    pub furniture_type: String,
    pub material: String,
    pub quality: String,
    pub color: String,
    pub purchase_year: i32,
    pub original_price: u64,
    /// Years elapsed between purchase and the observation.
    pub condition_years: u32,
    pub target_year: i32,
    /// Observed price, used as the training label.
    pub predicted_price: u64,
}

impl HistoricalRecord {
    pub fn category(&self, attribute: CategoricalAttribute) -> &str {
        match attribute {
            CategoricalAttribute::FurnitureType => &self.furniture_type,
            CategoricalAttribute::Material => &self.material,
            CategoricalAttribute::Quality => &self.quality,
            CategoricalAttribute::Color => &self.color,
        }
    }

    /// Whether `target_year == purchase_year + condition_years` holds.
    pub fn is_consistent(&self) -> bool {
        i64::from(self.purchase_year) + i64::from(self.condition_years)
            == i64::from(self.target_year)
    }
}
