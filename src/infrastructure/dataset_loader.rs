//! CSV dataset loading and monetary normalization.
//!
//! Expected header:
//! `Furniture_Type,Material,Quality,Color,Purchase_Year,Original_Price,Condition_Years,Target_Year,Predicted_Price`
//!
//! Price columns may carry a currency symbol and thousands separators
//! (`₹25,000`); both are stripped before parsing as an integer.

use crate::domain::errors::DatasetError;
use crate::domain::ports::DatasetSource;
use crate::domain::valuation::record::{CategoricalAttribute, HistoricalRecord};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{info, warn};

const CURRENCY_SYMBOLS: &[char] = &['₹', '$', '€', '£', '¥'];

/// What to do with rows where `Target_Year != Purchase_Year + Condition_Years`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyPolicy {
    /// Log the row and keep it for training.
    #[default]
    Warn,
    /// Abort loading.
    Reject,
}

impl FromStr for ConsistencyPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "warn" => Ok(ConsistencyPolicy::Warn),
            "reject" => Ok(ConsistencyPolicy::Reject),
            _ => anyhow::bail!(
                "Invalid DATASET_CONSISTENCY: {}. Must be 'warn' or 'reject'",
                s
            ),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "Furniture_Type")]
    furniture_type: String,
    #[serde(rename = "Material")]
    material: String,
    #[serde(rename = "Quality")]
    quality: String,
    #[serde(rename = "Color")]
    color: String,
    #[serde(rename = "Purchase_Year")]
    purchase_year: i32,
    #[serde(rename = "Original_Price")]
    original_price: String,
    #[serde(rename = "Condition_Years")]
    condition_years: u32,
    #[serde(rename = "Target_Year")]
    target_year: i32,
    #[serde(rename = "Predicted_Price")]
    predicted_price: String,
}

/// Strips currency symbols, `,` separators and whitespace, then parses the
/// remainder as a non-negative integer amount.
pub fn parse_currency(raw: &str) -> Result<u64, String> {
    let digits: String = raw
        .chars()
        .filter(|c| !(CURRENCY_SYMBOLS.contains(c) || *c == ',' || c.is_whitespace()))
        .collect();
    digits.parse::<u64>().map_err(|e| e.to_string())
}

/// Reads historical records from a CSV file.
#[derive(Debug, Clone)]
pub struct CsvDatasetLoader {
    path: PathBuf,
    policy: ConsistencyPolicy,
}

impl CsvDatasetLoader {
    pub fn new(path: impl Into<PathBuf>, policy: ConsistencyPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parses every row of `reader`. Any malformed row aborts the whole load.
    pub fn load_reader<R: Read>(
        reader: R,
        policy: ConsistencyPolicy,
    ) -> Result<Vec<HistoricalRecord>, DatasetError> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| DatasetError::Unreadable {
                reason: format!("Failed to read header: {}", e),
            })?
            .clone();

        let mut records = Vec::new();
        let mut inconsistent = 0usize;

        for result in rdr.records() {
            let row = result.map_err(|e| DatasetError::Unreadable {
                reason: e.to_string(),
            })?;
            let line = row.position().map(|p| p.line()).unwrap_or(0);

            let raw: RawRecord = row.deserialize(Some(&headers)).map_err(|e| {
                let field_index = match e.kind() {
                    csv::ErrorKind::Deserialize { err, .. } => err.field().map(|i| i as usize),
                    _ => None,
                };
                DatasetError::MalformedRecord {
                    line,
                    field: field_index
                        .and_then(|i| headers.get(i))
                        .unwrap_or("record")
                        .to_string(),
                    value: field_index
                        .and_then(|i| row.get(i))
                        .unwrap_or_default()
                        .to_string(),
                    reason: e.to_string(),
                }
            })?;

            let record = Self::normalize(raw, line)?;
            if !record.is_consistent() {
                match policy {
                    ConsistencyPolicy::Reject => {
                        return Err(DatasetError::InconsistentRecord {
                            line,
                            purchase_year: record.purchase_year,
                            condition_years: record.condition_years,
                            target_year: record.target_year,
                        });
                    }
                    ConsistencyPolicy::Warn => {
                        inconsistent += 1;
                        warn!(
                            "Line {}: purchase year {} + {} condition years != target year {}",
                            line, record.purchase_year, record.condition_years, record.target_year
                        );
                    }
                }
            }
            records.push(record);
        }

        if inconsistent > 0 {
            warn!(
                "{} of {} records have inconsistent target years; training on them as-is",
                inconsistent,
                records.len()
            );
        }
        Ok(records)
    }

    fn normalize(raw: RawRecord, line: u64) -> Result<HistoricalRecord, DatasetError> {
        let price = |field: &str, value: &str| {
            parse_currency(value).map_err(|reason| DatasetError::MalformedRecord {
                line,
                field: field.to_string(),
                value: value.to_string(),
                reason,
            })
        };
        let original_price = price("Original_Price", &raw.original_price)?;
        let predicted_price = price("Predicted_Price", &raw.predicted_price)?;

        let record = HistoricalRecord {
            furniture_type: raw.furniture_type,
            material: raw.material,
            quality: raw.quality,
            color: raw.color,
            purchase_year: raw.purchase_year,
            original_price,
            condition_years: raw.condition_years,
            target_year: raw.target_year,
            predicted_price,
        };

        for attribute in CategoricalAttribute::ALL {
            if record.category(attribute).is_empty() {
                return Err(DatasetError::MalformedRecord {
                    line,
                    field: attribute.column_name().to_string(),
                    value: String::new(),
                    reason: "empty category".to_string(),
                });
            }
        }
        Ok(record)
    }
}

impl DatasetSource for CsvDatasetLoader {
    fn load(&self) -> Result<Vec<HistoricalRecord>, DatasetError> {
        info!("Loading dataset from {:?}", self.path);
        let file = File::open(&self.path).map_err(|e| DatasetError::Unreadable {
            reason: format!("{}: {}", self.path.display(), e),
        })?;
        let records = Self::load_reader(BufReader::new(file), self.policy)?;
        info!("Loaded {} records from {:?}", records.len(), self.path);
        Ok(records)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
