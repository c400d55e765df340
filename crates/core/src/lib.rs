//! Core types and traits for slugfill
//!
//! This crate contains domain types shared across all other crates.

pub mod constants;
pub mod env_config;
mod config;
mod error;
mod record;
mod report;
mod sanitizer;

pub use config::*;
pub use error::*;
pub use record::*;
pub use report::*;
pub use sanitizer::*;
