//! CSV input sources and parsing module

pub mod reader;
pub mod validation;

use crate::document::Document;
use crate::error::{ConversionError, ConversionResult};
use std::path::PathBuf;

pub use reader::{read_document, CsvReadOptions};
pub use validation::ensure_input_file;

/// Source for parsing operations
#[derive(Debug, Clone, PartialEq)]
pub enum CsvSource {
    /// Raw CSV text
    String(String),
    /// CSV file on disk
    File(PathBuf),
}

impl CsvSource {
    /// Parse CSV from this source into a document
    pub fn parse(&self, options: &CsvReadOptions) -> ConversionResult<Document> {
        match self {
            CsvSource::String(content) => read_document(content.as_bytes(), options),
            CsvSource::File(path) => {
                ensure_input_file(path)?;
                // The handle is dropped before the caller opens any output.
                let file = std::fs::File::open(path)
                    .map_err(|e| ConversionError::io_at(e, path))?;
                read_document(std::io::BufReader::new(file), options)
            }
        }
    }

    /// Get a human-readable description of the source
    pub fn description(&self) -> String {
        match self {
            CsvSource::String(_) => "string input".to_string(),
            CsvSource::File(path) => format!("file: {}", path.display()),
        }
    }

    /// Get the size of the source in bytes (if known)
    pub fn size_bytes(&self) -> Option<u64> {
        match self {
            CsvSource::String(s) => Some(s.len() as u64),
            CsvSource::File(path) => std::fs::metadata(path).ok().map(|m| m.len()),
        }
    }
}
