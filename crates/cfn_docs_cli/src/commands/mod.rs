//! CLI command definitions.

use clap::{Parser, Subcommand};

pub mod batch;
pub mod generate;
pub mod init_base;

/// cfn-docs - Markdown documentation for CloudFormation templates
#[derive(Parser)]
#[command(name = "cfn-docs")]
#[command(version, about = "Generate Markdown documentation for CloudFormation templates")]
#[command(long_about = r#"
cfn-docs renders a README for a CloudFormation template: its description,
parameters, resources and outputs.

If a base template directory is given and it contains README.jinja, the
generated sections are placed into that file's description, parameters,
resources and outputs blocks. Otherwise a built-in layout is used.

COMMANDS:
  generate   → Render documentation for one template
  batch      → Render documentation for every template under a directory
  init-base  → Write a starter README.jinja base template

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments
  3 - Template error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render documentation for a single template
    Generate(generate::GenerateArgs),

    /// Render documentation for every template under a directory
    Batch(batch::BatchArgs),

    /// Write a starter base template
    #[command(name = "init-base")]
    InitBase(init_base::InitBaseArgs),
}
