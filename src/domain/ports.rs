use crate::domain::errors::DatasetError;
use crate::domain::valuation::record::HistoricalRecord;

/// Backing store of historical price observations. Read-only.
pub trait DatasetSource {
    fn load(&self) -> Result<Vec<HistoricalRecord>, DatasetError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}
