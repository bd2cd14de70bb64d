use crate::domain::valuation::record::CategoricalAttribute;
use thiserror::Error;

/// Errors raised while reading and normalizing the historical dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Malformed record at line {line}: {field} = {value:?} ({reason})")]
    MalformedRecord {
        line: u64,
        field: String,
        value: String,
        reason: String,
    },

    #[error(
        "Inconsistent record at line {line}: {purchase_year} + {condition_years} years != target year {target_year}"
    )]
    InconsistentRecord {
        line: u64,
        purchase_year: i32,
        condition_years: u32,
        target_year: i32,
    },

    #[error("Dataset unreadable: {reason}")]
    Unreadable { reason: String },
}

/// Errors raised while fitting encoders and the regression model
#[derive(Debug, Error)]
pub enum TrainingError {
    #[error("Insufficient data: {reason}")]
    InsufficientData { reason: String },

    #[error("Record {index} cannot be encoded: {reason}")]
    UnencodableRecord { index: usize, reason: String },

    #[error("Model training failed: {reason}")]
    ModelFailure { reason: String },
}

/// Errors surfaced to the caller for a rejected prediction query
#[derive(Debug, Error, Clone, PartialEq)]
pub enum QueryError {
    #[error("Unknown {attribute} category: {label:?}")]
    UnknownCategory {
        attribute: CategoricalAttribute,
        label: String,
    },

    #[error("Unknown {attribute} code: {code}")]
    UnknownCode {
        attribute: CategoricalAttribute,
        code: usize,
    },

    #[error("Target year {target_year} precedes purchase year {purchase_year}")]
    InvalidRange { purchase_year: i32, target_year: i32 },

    #[error("Prediction failed: {reason}")]
    ModelFailure { reason: String },
}
