//! Reading template files from disk.
//!
//! JSON files are read with `serde_json`, everything else as YAML. Both keep
//! the declaration order of every mapping.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::{DocsError, DocsResult};

/// File extensions treated as templates.
pub const TEMPLATE_EXTENSIONS: [&str; 4] = ["yaml", "yml", "json", "template"];

/// Read a template file into a mapping.
pub fn read_template(path: impl AsRef<Path>) -> DocsResult<Mapping> {
    let path = path.as_ref();
    debug!("Reading template from {:?}", path);

    let content = fs::read_to_string(path)?;
    let value: Value = if has_extension(path, "json") {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };

    match value {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(DocsError::malformed(
            path.display().to_string(),
            "top level must be a mapping",
        )),
    }
}

/// Display name for a template file: its file stem.
pub fn template_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Whether `path` looks like a template file.
pub fn is_template_file(path: &Path) -> bool {
    TEMPLATE_EXTENSIONS
        .iter()
        .any(|ext| has_extension(path, ext))
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case(ext))
        .unwrap_or(false)
}
