//! CSV to JSON conversion module
//!
//! This module contains the core conversion logic, configuration, and output
//! handling.

pub mod config;
pub mod engine;
pub mod output;

pub use config::ConversionConfig;

pub use engine::{
    convert_csv_file, convert_csv_str, ConversionEngine, ConversionMetadata, JsonData,
};
pub use output::OutputTarget;

pub use crate::error::ConversionResult;
