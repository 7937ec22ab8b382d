//! Output destinations for converted documents

use crate::error::{ConversionError, ConversionResult};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the serialized document goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// `None` and `-` select standard output
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new("-") => OutputTarget::File(path.to_path_buf()),
            _ => OutputTarget::Stdout,
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, OutputTarget::Stdout)
    }

    /// Get output destination description
    pub fn description(&self) -> String {
        match self {
            OutputTarget::Stdout => "standard output".to_string(),
            OutputTarget::File(path) => format!("'{}'", path.display()),
        }
    }

    /// Write `content` to this target.
    ///
    /// Files get a single trailing newline when `trailing_newline` is set and
    /// are created (with missing parent directories) or truncated. Standard
    /// output never gets the extra newline.
    pub fn write(&self, content: &str, trailing_newline: bool) -> ConversionResult<u64> {
        match self {
            OutputTarget::Stdout => {
                let stdout = std::io::stdout();
                let mut handle = stdout.lock();
                write_content(&mut handle, content, false)?;
                Ok(content.len() as u64)
            }
            OutputTarget::File(path) => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)
                            .map_err(|e| ConversionError::io_at(e, parent))?;
                    }
                }

                let mut file = std::fs::File::create(path)
                    .map_err(|e| ConversionError::io_at(e, path))?;
                let written = write_content(&mut file, content, trailing_newline)
                    .map_err(|e| ConversionError::io_at(e, path))?;

                debug!(path = %path.display(), bytes = written, "wrote output file");
                Ok(written)
            }
        }
    }
}

/// Write content to any sink, optionally followed by one newline
pub fn write_content<W: Write>(
    sink: &mut W,
    content: &str,
    trailing_newline: bool,
) -> std::io::Result<u64> {
    sink.write_all(content.as_bytes())?;
    let mut written = content.len() as u64;
    if trailing_newline {
        sink.write_all(b"\n")?;
        written += 1;
    }
    sink.flush()?;
    Ok(written)
}
