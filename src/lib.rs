//! CSV to JSON Converter
//!
//! Reads a comma-separated file whose first row is a header and writes the
//! rows as a JSON array of objects, keyed by header column, in input order.
//! Every cell stays a string.

pub mod cli;
pub mod conversion;
pub mod document;
pub mod error;
pub mod formatter;
pub mod parser;

// Re-export commonly used types
pub use conversion::{
    convert_csv_file, convert_csv_str, ConversionConfig, ConversionEngine, JsonData, OutputTarget,
};
pub use document::{Document, FieldValue, Record};
pub use error::{ConversionError, ConversionErrorKind, ConversionResult};
pub use formatter::JsonFormatter;
pub use parser::CsvSource;

/// Convert CSV text to JSON with default configuration
pub fn convert_csv(csv_text: &str) -> ConversionResult<String> {
    convert_csv_str(csv_text, &ConversionConfig::default())
}

/// Convert a CSV file to `output` with the given indentation width
pub fn convert(
    input: &std::path::Path,
    output: &OutputTarget,
    indent_size: usize,
) -> ConversionResult<JsonData> {
    let config = ConversionConfig::default().with_indent_size(indent_size);
    convert_csv_file(input, output, &config)
}
