// Furniture valuation domain: records, encodings, queries
pub mod valuation;

// Port interfaces
pub mod ports;

// Domain-specific error types
pub mod errors;
