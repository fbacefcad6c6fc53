// src/lib.rs
pub mod analysis;
pub mod api;
pub mod cli;
pub mod core;
pub mod generators;
pub mod models;
pub mod policy;
pub mod suggestions;
pub mod utils;

pub use crate::core::{Config, Engine, EngineError};
