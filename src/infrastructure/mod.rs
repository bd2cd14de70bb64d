pub mod dataset_loader;

pub use dataset_loader::{ConsistencyPolicy, CsvDatasetLoader};
