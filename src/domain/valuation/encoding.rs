use super::record::{CategoricalAttribute, HistoricalRecord};
use crate::domain::errors::{QueryError, TrainingError};
use std::collections::{BTreeSet, HashMap};

/// Label <-> code mapping for a single categorical attribute.
///
/// Codes are assigned by sorting the distinct labels (byte-wise on the raw
/// string) and numbering them from 0, so the mapping depends only on the
/// label set and never on the order rows were read in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryEncoding {
    attribute: CategoricalAttribute,
    labels: Vec<String>,
    codes: HashMap<String, usize>,
}

impl CategoryEncoding {
    /// Builds the encoding for `attribute` from every record in the dataset.
    pub fn build(
        records: &[HistoricalRecord],
        attribute: CategoricalAttribute,
    ) -> Result<Self, TrainingError> {
        Self::from_labels(
            attribute,
            records.iter().map(|record| record.category(attribute)),
        )
    }

    pub fn from_labels<'a, I>(attribute: CategoricalAttribute, labels: I) -> Result<Self, TrainingError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let distinct: BTreeSet<&str> = labels.into_iter().collect();
        if distinct.is_empty() {
            return Err(TrainingError::InsufficientData {
                reason: format!("column {} has no distinct values", attribute.column_name()),
            });
        }

        let labels: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        let codes = labels
            .iter()
            .enumerate()
            .map(|(code, label)| (label.clone(), code))
            .collect();

        Ok(Self {
            attribute,
            labels,
            codes,
        })
    }

    pub fn attribute(&self) -> CategoricalAttribute {
        self.attribute
    }

    pub fn encode(&self, label: &str) -> Result<usize, QueryError> {
        self.codes
            .get(label)
            .copied()
            .ok_or_else(|| QueryError::UnknownCategory {
                attribute: self.attribute,
                label: label.to_string(),
            })
    }

    pub fn decode(&self, code: usize) -> Result<&str, QueryError> {
        self.labels
            .get(code)
            .map(String::as_str)
            .ok_or(QueryError::UnknownCode {
                attribute: self.attribute,
                code,
            })
    }

    /// Known labels in code order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Category codes of one item, in feature-vector column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedCategories {
    pub furniture_type: usize,
    pub material: usize,
    pub quality: usize,
    pub color: usize,
}

/// One independent encoding per categorical attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncoderBank {
    furniture_type: CategoryEncoding,
    material: CategoryEncoding,
    quality: CategoryEncoding,
    color: CategoryEncoding,
}

impl EncoderBank {
    pub fn fit(records: &[HistoricalRecord]) -> Result<Self, TrainingError> {
        if records.is_empty() {
            return Err(TrainingError::InsufficientData {
                reason: "dataset has no rows".to_string(),
            });
        }

        Ok(Self {
            furniture_type: CategoryEncoding::build(records, CategoricalAttribute::FurnitureType)?,
            material: CategoryEncoding::build(records, CategoricalAttribute::Material)?,
            quality: CategoryEncoding::build(records, CategoricalAttribute::Quality)?,
            color: CategoryEncoding::build(records, CategoricalAttribute::Color)?,
        })
    }

    pub fn get(&self, attribute: CategoricalAttribute) -> &CategoryEncoding {
        match attribute {
            CategoricalAttribute::FurnitureType => &self.furniture_type,
            CategoricalAttribute::Material => &self.material,
            CategoricalAttribute::Quality => &self.quality,
            CategoricalAttribute::Color => &self.color,
        }
    }

    pub fn encode(&self, attribute: CategoricalAttribute, label: &str) -> Result<usize, QueryError> {
        self.get(attribute).encode(label)
    }

    pub fn encode_labels(
        &self,
        furniture_type: &str,
        material: &str,
        quality: &str,
        color: &str,
    ) -> Result<EncodedCategories, QueryError> {
        Ok(EncodedCategories {
            furniture_type: self.furniture_type.encode(furniture_type)?,
            material: self.material.encode(material)?,
            quality: self.quality.encode(quality)?,
            color: self.color.encode(color)?,
        })
    }

    pub fn encode_record(&self, record: &HistoricalRecord) -> Result<EncodedCategories, QueryError> {
        self.encode_labels(
            &record.furniture_type,
            &record.material,
            &record.quality,
            &record.color,
        )
    }
}
