//! Base template loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DocsError, DocsResult};

/// File name looked up inside the base template directory.
pub const DEFAULT_BASE_TEMPLATE: &str = "README.jinja";

/// Loader for a base template stored in a directory.
#[derive(Debug, Clone)]
pub struct BaseTemplateLoader {
    dir: PathBuf,
    file_name: String,
}

impl BaseTemplateLoader {
    /// Create a loader for `dir`, looking for `README.jinja`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: DEFAULT_BASE_TEMPLATE.to_string(),
        }
    }

    /// Use a different base template file name.
    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    /// Full path of the base template file.
    pub fn template_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Whether the base template file exists.
    pub fn exists(&self) -> bool {
        self.template_path().is_file()
    }

    /// Path of the base template, if the directory holds one.
    pub fn locate(&self) -> DocsResult<PathBuf> {
        if !self.dir.is_dir() {
            return Err(DocsError::BaseTemplateNotFound(self.dir.clone()));
        }

        let path = self.find_template()?;
        debug!("Found base template at {:?}", path);
        Ok(path)
    }

    /// Name the template is registered under when extended.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Locate the template file by listing the directory.
    fn find_template(&self) -> DocsResult<PathBuf> {
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            if entry.file_name().to_string_lossy() == self.file_name && entry.path().is_file() {
                return Ok(entry.path());
            }
        }
        Err(DocsError::BaseTemplateNotFound(self.template_path()))
    }

    /// The directory this loader reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
