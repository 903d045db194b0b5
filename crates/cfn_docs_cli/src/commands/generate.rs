//! Generate command - Render documentation for one template.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cfn_docs::{read_template, template_name, DocsConfig, RenderMode};

#[derive(Args)]
pub struct GenerateArgs {
    /// Template file (YAML or JSON)
    pub template: PathBuf,

    /// Name shown in the documentation (defaults to the file stem)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Directory containing the base template
    #[arg(long, env = "CFN_DOCS_BASE_TEMPLATE_DIR")]
    pub base_template_dir: Option<PathBuf>,

    /// Base template file name
    #[arg(long)]
    pub base_template_name: Option<String>,

    /// Output file (defaults to the configured file next to the template)
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the documentation instead of writing a file
    #[arg(long)]
    pub stdout: bool,

    /// Config file (defaults to .cfn-docs.yaml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Overwrite an existing output file
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: GenerateArgs) -> Result<()> {
    if !args.template.is_file() {
        anyhow::bail!("Template not found: {:?}", args.template);
    }

    let config = resolve_config(
        args.config.as_deref(),
        args.base_template_dir,
        args.base_template_name,
    )?;

    let template = read_template(&args.template)
        .with_context(|| format!("Failed to read template {:?}", args.template))?;
    let name = args
        .name
        .unwrap_or_else(|| template_name(&args.template));

    let rendered = config
        .generator()
        .render(&template, &name)
        .with_context(|| format!("Failed to render documentation for {}", name))?;
    report_mode(&name, &rendered.mode);

    if args.stdout {
        print!("{}", rendered.markdown);
        return Ok(());
    }

    let output = args
        .output
        .unwrap_or_else(|| output_path(&args.template, &config.output_file));
    if output.exists() && !args.force {
        anyhow::bail!(
            "Output already exists at {:?}. Use --force to overwrite.",
            output
        );
    }
    fs::write(&output, &rendered.markdown)
        .with_context(|| format!("Failed to write {:?}", output))?;
    println!("✅ Wrote {}", output.display());

    Ok(())
}

/// Load the config file and apply command line overrides.
pub fn resolve_config(
    config_path: Option<&Path>,
    base_template_dir: Option<PathBuf>,
    base_template_name: Option<String>,
) -> Result<DocsConfig> {
    let mut config = match config_path {
        Some(path) => DocsConfig::load(path)
            .with_context(|| format!("Failed to load config {:?}", path))?,
        None => {
            let current_dir = std::env::current_dir()?;
            DocsConfig::discover(&current_dir).context("Failed to load config")?
        }
    };

    if base_template_dir.is_some() {
        config.base_template_dir = base_template_dir;
    }
    if let Some(name) = base_template_name {
        config.base_template_name = name;
    }
    config.validate()?;

    Ok(config)
}

/// Documentation path for a template: `file_name` in the template's directory.
pub fn output_path(template: &Path, file_name: &str) -> PathBuf {
    template
        .parent()
        .map(|dir| dir.join(file_name))
        .unwrap_or_else(|| PathBuf::from(file_name))
}

pub fn report_mode(name: &str, mode: &RenderMode) {
    match mode {
        RenderMode::Composed { base_template } => {
            info!("{}: composed with {:?}", name, base_template)
        }
        RenderMode::Standalone { reason: Some(reason) } => {
            info!("{}: built-in layout ({})", name, reason)
        }
        RenderMode::Standalone { reason: None } => info!("{}: built-in layout", name),
    }
}
