//! Init-base command - Write a starter base template.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cfn_docs::{BaseTemplateLoader, DEFAULT_BASE_TEMPLATE, STARTER_TEMPLATE};

#[derive(Args)]
pub struct InitBaseArgs {
    /// Directory to write the base template into
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Base template file name
    #[arg(long, default_value = DEFAULT_BASE_TEMPLATE)]
    pub name: String,

    /// Overwrite an existing base template
    #[arg(short, long)]
    pub force: bool,
}

pub fn execute(args: InitBaseArgs) -> Result<()> {
    let loader = BaseTemplateLoader::new(&args.dir).with_file_name(&args.name);
    let path = loader.template_path();

    info!("Writing base template to {:?}", path);

    if loader.exists() && !args.force {
        anyhow::bail!(
            "Base template already exists at {:?}. Use --force to overwrite.",
            path
        );
    }

    fs::create_dir_all(&args.dir)
        .with_context(|| format!("Failed to create {:?}", args.dir))?;
    fs::write(&path, STARTER_TEMPLATE).with_context(|| format!("Failed to write {:?}", path))?;

    println!("✅ Created {}", path.display());
    println!();
    println!("Next steps:");
    println!(
        "  cfn-docs generate template.yaml --base-template-dir {}",
        args.dir.display()
    );

    Ok(())
}
