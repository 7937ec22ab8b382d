//! JSON formatting module

use crate::conversion::{ConversionConfig, ConversionResult};
use crate::document::Document;
use crate::error::{ConversionError, ConversionErrorKind};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::debug;

/// Pretty-printing JSON formatter
///
/// Each nesting level is indented by `indent_size` spaces. A width of zero
/// still puts every element on its own line, only without indentation.
/// Non-ASCII text is written as-is; only the escapes JSON requires (quote,
/// backslash and control characters) are applied.
pub struct JsonFormatter {
    indent: Vec<u8>,
}

impl JsonFormatter {
    /// Create a new formatter with configuration
    pub fn new(config: &ConversionConfig) -> Self {
        Self::with_indent(config.indent_size)
    }

    pub fn with_indent(indent_size: usize) -> Self {
        Self {
            indent: vec![b' '; indent_size],
        }
    }

    /// Format a document as a JSON array of objects
    pub fn format(&self, document: &Document) -> ConversionResult<String> {
        self.format_value(document)
    }

    /// Format any serializable value with this formatter's indentation
    pub fn format_value<T: Serialize + ?Sized>(&self, value: &T) -> ConversionResult<String> {
        let mut buffer = Vec::with_capacity(128);
        let formatter = PrettyFormatter::with_indent(&self.indent);
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        value.serialize(&mut serializer)?;

        debug!(bytes = buffer.len(), indent = self.indent.len(), "serialized JSON");

        String::from_utf8(buffer).map_err(|e| {
            ConversionError::conversion(ConversionErrorKind::serialization(format!(
                "serializer produced invalid UTF-8: {}",
                e
            )))
        })
    }
}

/// Format a document with an explicit indentation width
pub fn format_document(document: &Document, indent_size: usize) -> ConversionResult<String> {
    JsonFormatter::with_indent(indent_size).format(document)
}
