//! Input path validation

use crate::error::{ConversionError, ConversionResult};
use std::path::Path;

/// Fail with `InputNotFound` unless `path` names an existing regular file
pub fn ensure_input_file(path: &Path) -> ConversionResult<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(ConversionError::input_not_found(path))
    }
}
