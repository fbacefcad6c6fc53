// src/core/mod.rs
pub mod config;
pub mod engine;
pub mod error;

pub use config::Config;
pub use engine::Engine;
pub use error::{EngineError, Result};
