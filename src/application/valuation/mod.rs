pub mod engine;
pub mod predictor;
pub mod smartcore_predictor;
pub mod sweep;
pub mod trainer;

pub use engine::DepreciationEngine;
pub use trainer::ForestParameters;
