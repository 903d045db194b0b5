//! Project configuration read from `.cfn-docs.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DocsError, DocsResult};
use crate::generator::DocGenerator;
use crate::loader::DEFAULT_BASE_TEMPLATE;

/// Config file names looked up by [`DocsConfig::discover`], in order.
pub const CONFIG_FILES: [&str; 2] = [".cfn-docs.yaml", ".cfn-docs.yml"];

/// Documentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// Directory holding the base template
    pub base_template_dir: Option<PathBuf>,
    /// Base template file name inside `base_template_dir`
    pub base_template_name: String,
    /// File name the generated documentation is written to
    pub output_file: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_template_dir: None,
            base_template_name: DEFAULT_BASE_TEMPLATE.to_string(),
            output_file: "README.md".to_string(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from a file.
    ///
    /// A relative `base_template_dir` is resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> DocsResult<Self> {
        let path = path.as_ref();
        debug!("Loading config from {:?}", path);

        let content = fs::read_to_string(path)?;
        let mut config: DocsConfig = if content.trim().is_empty() {
            DocsConfig::default()
        } else {
            serde_yaml::from_str(&content)?
        };

        if let (Some(dir), Some(parent)) = (&config.base_template_dir, path.parent()) {
            if dir.is_relative() {
                config.base_template_dir = Some(parent.join(dir));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Load the first config file found in `dir`, or the defaults.
    pub fn discover(dir: impl AsRef<Path>) -> DocsResult<Self> {
        let dir = dir.as_ref();
        match CONFIG_FILES.iter().map(|f| dir.join(f)).find(|p| p.is_file()) {
            Some(path) => Self::load(path),
            None => {
                debug!("No config file in {:?}, using defaults", dir);
                Ok(Self::default())
            }
        }
    }

    /// Reject settings that cannot name a file.
    pub fn validate(&self) -> DocsResult<()> {
        for (field, value) in [
            ("base_template_name", &self.base_template_name),
            ("output_file", &self.output_file),
        ] {
            if value.trim().is_empty() {
                return Err(DocsError::InvalidConfig(format!("{field} must not be empty")));
            }
            if value.contains(['/', '\\']) {
                return Err(DocsError::InvalidConfig(format!(
                    "{field} must be a file name, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Build a generator from these settings.
    pub fn generator(&self) -> DocGenerator {
        DocGenerator::new()
            .with_base_template_dir(self.base_template_dir.clone())
            .with_base_template_name(&self.base_template_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = DocsConfig::default();
        assert_eq!(config.base_template_name, "README.jinja");
        assert_eq!(config.output_file, "README.md");
        assert!(config.base_template_dir.is_none());
    }

    #[test]
    fn test_discover_without_file() {
        let temp = tempdir().unwrap();
        assert_eq!(DocsConfig::discover(temp.path()).unwrap(), DocsConfig::default());
    }

    #[test]
    fn test_relative_dir_resolved_against_config() {
        let temp = tempdir().unwrap();
        fs::write(
            temp.path().join(".cfn-docs.yml"),
            "base_template_dir: docs\noutput_file: DOCS.md\n",
        )
        .unwrap();

        let config = DocsConfig::discover(temp.path()).unwrap();
        assert_eq!(config.base_template_dir, Some(temp.path().join("docs")));
        assert_eq!(config.output_file, "DOCS.md");
        assert_eq!(config.base_template_name, "README.jinja");
    }

    #[test]
    fn test_invalid_output_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join(".cfn-docs.yaml");
        fs::write(&path, "output_file: docs/README.md\n").unwrap();
        assert!(matches!(
            DocsConfig::load(&path),
            Err(DocsError::InvalidConfig(_))
        ));
    }
}
