// Startup wiring: dataset -> trained engine
pub mod bootstrap;

// Encoding, training and prediction sweep
pub mod valuation;
