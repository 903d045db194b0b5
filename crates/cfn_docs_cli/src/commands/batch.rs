//! Batch command - Render documentation for every template under a directory.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};
use walkdir::WalkDir;

use cfn_docs::{is_template_file, read_template, template_name, DocGenerator};

use super::generate::{report_mode, resolve_config};

#[derive(Args)]
pub struct BatchArgs {
    /// Directory to scan for templates
    pub dir: PathBuf,

    /// Directory containing the base template
    #[arg(long, env = "CFN_DOCS_BASE_TEMPLATE_DIR")]
    pub base_template_dir: Option<PathBuf>,

    /// Base template file name
    #[arg(long)]
    pub base_template_name: Option<String>,

    /// Config file (defaults to .cfn-docs.yaml in the current directory)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the files that would be written without writing them
    #[arg(long)]
    pub dry_run: bool,
}

pub fn execute(args: BatchArgs) -> Result<()> {
    info!("Generating documentation under {:?}", args.dir);

    if !args.dir.is_dir() {
        anyhow::bail!("Directory not found: {:?}", args.dir);
    }

    let config = resolve_config(
        args.config.as_deref(),
        args.base_template_dir,
        args.base_template_name,
    )?;
    let generator = config.generator();

    let templates = find_templates(&args.dir);
    if templates.is_empty() {
        println!("⚠️  No templates found in {}", args.dir.display());
        return Ok(());
    }

    println!("📄 Documenting {} template(s)...\n", templates.len());

    let mut written = 0;
    let mut failed = 0;

    for (path, output) in output_paths(&templates) {
        if args.dry_run {
            println!("{} → {}", path.display(), output.display());
            continue;
        }

        match render_one(&generator, &path, &output) {
            Ok(()) => {
                println!("✅ {}", output.display());
                written += 1;
            }
            Err(e) => {
                println!("❌ {}: {:#}", path.display(), e);
                failed += 1;
            }
        }
    }

    if args.dry_run {
        return Ok(());
    }

    println!();
    println!("Results: {} written, {} failed", written, failed);

    if failed > 0 {
        anyhow::bail!("{} template(s) could not be documented", failed);
    }

    Ok(())
}

/// Template files under `dir`, sorted for stable output. Hidden files and
/// everything below hidden directories are skipped.
fn find_templates(dir: &Path) -> Vec<PathBuf> {
    let mut templates: Vec<PathBuf> = WalkDir::new(dir)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_template_file(p))
        .collect();
    templates.sort();
    debug!("Found {} template(s)", templates.len());
    templates
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

/// Pair each template with its documentation file.
///
/// Output is `<stem>.md` next to the template. Templates sharing a stem in
/// the same directory (`vpc.yaml` and `vpc.json`) keep their extension
/// instead (`vpc.yaml.md`, `vpc.json.md`) so neither overwrites the other.
fn output_paths(templates: &[PathBuf]) -> Vec<(PathBuf, PathBuf)> {
    let mut stems: HashMap<PathBuf, usize> = HashMap::new();
    for path in templates {
        *stems.entry(path.with_extension("md")).or_default() += 1;
    }

    templates
        .iter()
        .map(|path| {
            let plain = path.with_extension("md");
            let output = if stems[&plain] > 1 {
                let mut name = path.file_name().unwrap_or_default().to_os_string();
                name.push(".md");
                path.with_file_name(name)
            } else {
                plain
            };
            (path.clone(), output)
        })
        .collect()
}

fn render_one(generator: &DocGenerator, path: &Path, output: &Path) -> Result<()> {
    let template = read_template(path).context("Failed to read template")?;
    let name = template_name(path);
    let rendered = generator.render(&template, &name)?;
    report_mode(&name, &rendered.mode);
    fs::write(output, rendered.markdown).context("Failed to write documentation")?;
    Ok(())
}
