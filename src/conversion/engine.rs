//! Core conversion engine for CSV to JSON transformation

use crate::conversion::config::ConversionConfig;
use crate::conversion::output::OutputTarget;
use crate::conversion::ConversionResult;
use crate::document::Document;
use crate::error::{ConversionError, ConversionErrorKind};
use crate::formatter::JsonFormatter;
use crate::parser::CsvSource;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Core conversion result
#[derive(Debug, Clone)]
pub struct JsonData {
    pub content: String,
    pub metadata: ConversionMetadata,
}

impl JsonData {
    /// Create a new JSON data result
    pub fn new(content: String, metadata: ConversionMetadata) -> Self {
        Self { content, metadata }
    }

    /// Get the length of the output in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Metadata about the conversion process
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionMetadata {
    pub input_size: u64,
    pub output_size: u64,
    pub record_count: usize,
    pub column_count: usize,
    pub processing_time: Duration,
}

/// Main conversion engine
pub struct ConversionEngine {
    config: ConversionConfig,
}

impl ConversionEngine {
    /// Create a new conversion engine
    pub fn new(config: ConversionConfig) -> ConversionResult<Self> {
        config.validate().map_err(|message| {
            ConversionError::conversion(ConversionErrorKind::configuration(message))
        })?;
        Ok(Self { config })
    }

    /// Serialize an already built document
    pub fn convert_document(&self, document: &Document) -> ConversionResult<String> {
        JsonFormatter::new(&self.config).format(document)
    }

    /// Read and serialize a CSV source. Nothing is written anywhere.
    pub fn convert_source(&self, source: &CsvSource) -> ConversionResult<JsonData> {
        let start_time = Instant::now();
        debug!(source = %source.description(), "converting");

        let document = source.parse(&self.config.read_options())?;
        let content = self.convert_document(&document)?;

        let metadata = ConversionMetadata {
            input_size: source.size_bytes().unwrap_or(0),
            output_size: content.len() as u64,
            record_count: document.len(),
            column_count: document.column_count(),
            processing_time: start_time.elapsed(),
        };

        Ok(JsonData::new(content, metadata))
    }

    /// Convert CSV text to JSON text
    pub fn convert_string(&self, csv_text: &str) -> ConversionResult<JsonData> {
        self.convert_source(&CsvSource::String(csv_text.to_string()))
    }

    /// Convert a source and write the result to `target`.
    ///
    /// The input is read and serialized completely before the target is
    /// opened, so a failed read never creates or truncates an output file.
    pub fn convert_to_sink(
        &self,
        source: &CsvSource,
        target: &OutputTarget,
    ) -> ConversionResult<JsonData> {
        let mut data = self.convert_source(source)?;

        let trailing_newline = self.config.trailing_newline && !target.is_stdout();
        data.metadata.output_size = target.write(&data.content, trailing_newline)?;

        info!(
            records = data.metadata.record_count,
            output = %target.description(),
            "conversion complete"
        );
        Ok(data)
    }
}

/// High-level conversion functions
/// Convert a CSV file and write the JSON document to `target`
pub fn convert_csv_file(
    input: &Path,
    target: &OutputTarget,
    config: &ConversionConfig,
) -> ConversionResult<JsonData> {
    let engine = ConversionEngine::new(config.clone())?;
    engine.convert_to_sink(&CsvSource::File(input.to_path_buf()), target)
}

/// Convert CSV text to a JSON string
pub fn convert_csv_str(csv_text: &str, config: &ConversionConfig) -> ConversionResult<String> {
    let engine = ConversionEngine::new(config.clone())?;
    Ok(engine.convert_string(csv_text)?.content)
}
