//! Output path resolution and writing.

use std::fs;
use std::path::{Path, PathBuf};

use super::filename::markdown_filename;
use crate::error::ExportError;

/// Chooses where an export goes.
///
/// An explicit path is used as-is. Otherwise the file is named after the
/// sanitized title, inside `output_dir` (or the current directory).
pub fn resolve_output_path(explicit: Option<&Path>, output_dir: Option<&Path>, title: &str) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => output_dir
            .unwrap_or_else(|| Path::new("."))
            .join(markdown_filename(title)),
    }
}

/// Writes the Markdown, creating missing parent directories.
pub fn write_markdown(path: &Path, markdown: &str) -> Result<(), ExportError> {
    let to_write_error = |source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_write_error)?;
    }
    fs::write(path, markdown).map_err(to_write_error)
}
