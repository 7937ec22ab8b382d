//! Configuration options for CSV to JSON conversion

use crate::parser::reader::DEFAULT_OVERFLOW_KEY;
use crate::parser::CsvReadOptions;

/// Conversion configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Spaces per indentation level
    pub indent_size: usize,
    /// Key collecting cells beyond the header width
    pub overflow_key: String,
    /// Append a newline after the document when writing to a file
    pub trailing_newline: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            indent_size: 2,
            overflow_key: DEFAULT_OVERFLOW_KEY.to_string(),
            trailing_newline: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set indentation size
    pub fn with_indent_size(mut self, size: usize) -> Self {
        self.indent_size = size;
        self
    }

    /// Set the overflow key
    pub fn with_overflow_key(mut self, key: impl Into<String>) -> Self {
        self.overflow_key = key.into();
        self
    }

    /// Enable/disable the trailing newline on file output
    pub fn with_trailing_newline(mut self, enabled: bool) -> Self {
        self.trailing_newline = enabled;
        self
    }

    /// Validate configuration consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.overflow_key.is_empty() {
            return Err("Overflow key must not be empty".to_string());
        }

        Ok(())
    }

    pub fn read_options(&self) -> CsvReadOptions {
        CsvReadOptions {
            overflow_key: self.overflow_key.clone(),
        }
    }
}
