//! Writes generated documents to disk.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use crate::DocumentSet;

/// Writes `content` to `path` below the output tree, creating missing
/// directories.
///
/// # Errors
///
/// Returns an error naming the path if a directory or the file cannot be
/// written.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create output directory {}", dir.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Cannot write {}", path.display()))
}

/// Writes a JSON-LD document as pretty-printed JSON with a trailing newline.
///
/// # Errors
///
/// Returns an error if the document cannot be serialized or written.
pub fn write_document(path: &Path, body: &Value) -> Result<()> {
    let text = serde_json::to_string_pretty(body)
        .map(|json| json + "\n")
        .with_context(|| format!("Cannot serialize document {}", path.display()))?;
    write_text(path, &text)
}

/// Writes every document of `set` below `out_dir`. Returns the number written.
///
/// # Errors
///
/// Returns an error on the first document that cannot be written.
pub fn write_all(out_dir: &Path, set: &DocumentSet) -> Result<usize> {
    for document in &set.documents {
        let path = out_dir.join(&document.path);
        write_document(&path, &document.body)?;
        debug!(path = %path.display(), kind = ?document.kind, "document written");
    }
    Ok(set.documents.len())
}
