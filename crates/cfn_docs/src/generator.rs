//! Documentation generation with base template fallback.

use std::path::{Path, PathBuf};

use serde_yaml::Mapping;
use tracing::{debug, info, warn};

use crate::error::DocsResult;
use crate::loader::{BaseTemplateLoader, DEFAULT_BASE_TEMPLATE};
use crate::model::DocContext;
use crate::renderer::{render_composed, render_standalone};

/// Which layout produced a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderMode {
    /// Sections were substituted into a base template.
    Composed { base_template: PathBuf },
    /// The built-in layout was used. `reason` explains why the base template
    /// was skipped, if one was configured.
    Standalone { reason: Option<String> },
}

/// A rendered document and how it was produced.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub markdown: String,
    pub mode: RenderMode,
}

/// Markdown generator for parsed templates.
#[derive(Debug, Clone)]
pub struct DocGenerator {
    base_template_dir: Option<PathBuf>,
    base_template_name: String,
}

impl Default for DocGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl DocGenerator {
    /// Create a generator that always uses the built-in layout.
    pub fn new() -> Self {
        Self {
            base_template_dir: None,
            base_template_name: DEFAULT_BASE_TEMPLATE.to_string(),
        }
    }

    /// Compose with the base template found in `dir`.
    pub fn with_base_template_dir(mut self, dir: Option<impl Into<PathBuf>>) -> Self {
        self.base_template_dir = dir.map(Into::into);
        self
    }

    /// Look for `name` instead of `README.jinja`.
    pub fn with_base_template_name(mut self, name: impl Into<String>) -> Self {
        self.base_template_name = name.into();
        self
    }

    /// Render `template` to Markdown.
    pub fn generate(&self, template: &Mapping, name: &str) -> DocsResult<String> {
        self.render(template, name).map(|rendered| rendered.markdown)
    }

    /// Render `template`, reporting which layout was used.
    ///
    /// Any failure to load or render the base template falls back to the
    /// built-in layout. Only a malformed `template` is returned as an error.
    pub fn render(&self, template: &Mapping, name: &str) -> DocsResult<Rendered> {
        let ctx = DocContext::from_template(template, name)?;

        let reason = match &self.base_template_dir {
            Some(dir) => match self.compose(dir, &ctx) {
                Ok(rendered) => return Ok(rendered),
                Err(e) => {
                    warn!("Falling back to built-in layout for {}: {}", name, e);
                    Some(e.to_string())
                }
            },
            None => {
                debug!("No base template directory, using built-in layout for {}", name);
                None
            }
        };

        let markdown = render_standalone(&ctx)?;
        Ok(Rendered {
            markdown,
            mode: RenderMode::Standalone { reason },
        })
    }

    fn compose(&self, dir: &Path, ctx: &DocContext) -> DocsResult<Rendered> {
        let loader = BaseTemplateLoader::new(dir).with_file_name(&self.base_template_name);
        let base_template = loader.locate()?;
        info!("Rendering {} with base template {:?}", ctx.name, base_template);

        Ok(Rendered {
            markdown: render_composed(ctx, loader.dir(), loader.file_name())?,
            mode: RenderMode::Composed { base_template },
        })
    }
}

/// Render `template` as Markdown, extending `README.jinja` from
/// `base_template_path` when it exists and renders.
pub fn generate(
    template: &Mapping,
    name: &str,
    base_template_path: Option<&Path>,
) -> DocsResult<String> {
    DocGenerator::new()
        .with_base_template_dir(base_template_path)
        .generate(template, name)
}
