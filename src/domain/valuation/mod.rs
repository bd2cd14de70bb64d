pub mod encoding;
pub mod feature_registry;
pub mod query;
pub mod record;
