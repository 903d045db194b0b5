//! # cfn_docs
//!
//! Markdown documentation for CloudFormation-style templates.
//!
//! Given an already-parsed template mapping, this crate renders a Markdown
//! page with four sections:
//!
//! - Description
//! - Parameters table
//! - Resources table
//! - Outputs table
//!
//! When a base template directory is supplied, a child layout extends its
//! `README.jinja` with minijinja and fills the `description`, `parameters`,
//! `resources` and `outputs` blocks. If that file is missing or fails to
//! render, the built-in layout is rendered instead.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cfn_docs::{generate, read_template};
//! use std::path::Path;
//!
//! let template = read_template("infra/vpc.yaml").unwrap();
//! let markdown = generate(&template, "vpc", Some(Path::new("docs"))).unwrap();
//! println!("{markdown}");
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod format;
pub mod generator;
pub mod loader;
pub mod model;
pub mod renderer;
pub mod source;
pub mod templates;

pub use config::DocsConfig;
pub use error::{DocsError, DocsResult};
pub use extract::{get_description, get_outputs, get_parameters, get_resources};
pub use format::{add_breaks, strip_newlines};
pub use generator::{generate, DocGenerator, RenderMode, Rendered};
pub use loader::{BaseTemplateLoader, DEFAULT_BASE_TEMPLATE};
pub use model::{DocContext, OutputRow, ParameterRow, ResourceRow};
pub use renderer::{render_composed, render_standalone};
pub use source::{is_template_file, read_template, template_name};
pub use templates::{BLOCK_NAMES, STARTER_TEMPLATE};
