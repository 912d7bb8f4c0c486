//! Jekyll redirect stubs for a generated tree.
//!
//! Every `<name>.jsonld` gets a sibling `<name>.md` redirecting to it, and every
//! directory outside [`EXCLUDED_DIRS`] gets an `index.md` redirecting to the
//! document of the same name beside it (or, failing that, to its own
//! `index.jsonld`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use walkdir::WalkDir;

use crate::emit::write_text;

/// Directories that never get an `index.md`.
pub const EXCLUDED_DIRS: &[&str] = &["Context", "ClassDefinitions", "Ontology"];

/// Front matter of a redirect stub.
#[must_use]
pub fn stub(target: &str) -> String {
    format!("---\nredirect_to: \"{target}\"\n---\n")
}

/// Writes redirect stubs below `out_dir`. Returns the number of stubs written.
///
/// # Errors
///
/// Returns an error if the tree cannot be walked or a stub cannot be written.
pub fn write_redirects(out_dir: &Path) -> Result<usize> {
    let mut stubs: Vec<(PathBuf, String)> = Vec::new();

    for entry in WalkDir::new(out_dir).min_depth(1) {
        let entry = entry.with_context(|| format!("Failed to walk {}", out_dir.display()))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        if entry.file_type().is_dir() {
            if EXCLUDED_DIRS.contains(&name) {
                continue;
            }
            let sibling = path.with_file_name(format!("{name}.jsonld"));
            let own_index = path.join("index.jsonld");
            let target = if sibling.is_file() {
                sibling
            } else if own_index.is_file() {
                own_index
            } else {
                continue;
            };
            stubs.push((path.join("index.md"), site_path(out_dir, &target)));
        } else if let Some(stem) = name.strip_suffix(".jsonld") {
            if stem == "index" || path.with_file_name(stem).is_dir() {
                continue;
            }
            stubs.push((path.with_file_name(format!("{stem}.md")), site_path(out_dir, path)));
        }
    }

    for (path, target) in &stubs {
        write_text(path, &stub(target))?;
    }
    Ok(stubs.len())
}

/// `/`-rooted URL path of `path` relative to `out_dir`.
fn site_path(out_dir: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(out_dir).unwrap_or(path);
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    format!("/{}", parts.join("/"))
}
