//! Command-line interface module

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::conversion::{ConversionConfig, ConversionEngine, ConversionResult, JsonData, OutputTarget};
use crate::error::{ConversionError, ConversionErrorKind};
use crate::parser::CsvSource;

pub mod logging;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csv2json")]
#[command(about = "Convert a CSV file to JSON")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Path to the input CSV file
    #[arg()]
    pub input: PathBuf,

    /// Path to the output JSON file (default: stdout, also with '-')
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of spaces to use for JSON indentation
    #[arg(long, default_value_t = 2)]
    pub indent: usize,

    /// Print conversion statistics to stderr
    #[arg(long)]
    pub stats: bool,

    /// Enable verbose logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub conversion_config: ConversionConfig,
    pub output: OutputTarget,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> ConversionResult<Self> {
        let conversion_config = ConversionConfig::default().with_indent_size(args.indent);

        conversion_config
            .validate()
            .map_err(|e| ConversionError::conversion(ConversionErrorKind::configuration(e)))?;

        let output = OutputTarget::from_arg(args.output.as_deref());

        Ok(Self {
            args,
            conversion_config,
            output,
        })
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    /// Get input source description
    pub fn input_description(&self) -> String {
        format!("'{}'", self.args.input.display())
    }

    /// Get output destination description
    pub fn output_description(&self) -> String {
        self.output.description()
    }

    pub fn source(&self) -> CsvSource {
        CsvSource::File(self.args.input.clone())
    }
}

/// Run one conversion as described by the CLI configuration
pub fn run(config: &CliConfig) -> ConversionResult<JsonData> {
    tracing::debug!(
        input = %config.input_description(),
        output = %config.output_description(),
        indent = config.conversion_config.indent_size,
        "starting conversion"
    );

    let engine = ConversionEngine::new(config.conversion_config.clone())?;
    let data = engine.convert_to_sink(&config.source(), &config.output)?;

    if config.want_stats() {
        output_statistics(&data, config.is_quiet());
    }

    Ok(data)
}

/// Print conversion statistics. Stdout may carry the document, so this goes
/// to stderr.
pub fn output_statistics(data: &JsonData, quiet: bool) {
    if quiet {
        return;
    }

    for line in statistics_lines(data) {
        eprintln!("{}", line);
    }
}

fn statistics_lines(data: &JsonData) -> Vec<String> {
    let metadata = &data.metadata;
    vec![
        "Conversion Statistics:".to_string(),
        format!("Input size: {}", CliUtils::format_file_size(metadata.input_size)),
        format!("Output size: {}", CliUtils::format_file_size(metadata.output_size)),
        format!("Records: {}", metadata.record_count),
        format!("Columns: {}", metadata.column_count),
        format!(
            "Processing time: {}",
            CliUtils::format_duration(metadata.processing_time)
        ),
    ]
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("✗ {}", message);
    }
}

/// Handle CLI errors with user-friendly messages
pub fn handle_error(error: &ConversionError) {
    let message = error.user_message();
    CliUtils::show_error(&message);

    if let Some(ConversionErrorKind::Csv { .. }) = error.kind() {
        eprintln!("\nTip: the input must be UTF-8 encoded comma-separated text");
    }

    // Show usage hint
    eprintln!("\nTry 'csv2json --help' for usage information.");
}
