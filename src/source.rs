//! Loading the CSV data source
//!
//! The one recoverable-vs-fatal boundary in the system: if the source file
//! cannot be read, the parser is never invoked and the caller surfaces a
//! single error. Once the text is in memory, everything downstream is a
//! best-effort pass that cannot fail.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

/// Read the complete CSV text from disk.
pub fn load_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::SourceNotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded csv source");
    Ok(text)
}

/// Resolve the source path from the CLI flag or the configured default.
pub fn resolve_path(flag: Option<PathBuf>, configured: &str) -> PathBuf {
    flag.unwrap_or_else(|| PathBuf::from(configured))
}
