pub mod engine;

pub use engine::EngineBootstrap;
