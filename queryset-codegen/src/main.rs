//! queryset-codegen - query set code generation tool
//!
//! Generates typed query sets and updaters from model definitions as a plain
//! Rust source file checked into the consuming crate.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use queryset_codegen::{generate_file, GeneratorConfig};

#[derive(Parser)]
#[command(name = "queryset-codegen")]
#[command(about = "Generate typed query sets from model definitions", long_about = None)]
struct Cli {
    /// More output (debug logging)
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate query sets from model definitions
    Generate {
        /// Input file or directory containing model definitions
        #[arg(short, long)]
        input: PathBuf,

        /// Generated source file
        #[arg(short, long)]
        output: PathBuf,

        /// Generator configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Skip rustfmt
        #[arg(long)]
        no_format: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            no_format,
        } => {
            let mut generator_config = GeneratorConfig::load(config.as_deref())
                .context("failed to load generator configuration")?;
            if no_format {
                generator_config.rustfmt = false;
            }

            generate_file(&input, &output, &generator_config).with_context(|| {
                format!(
                    "failed to generate {} from {}",
                    output.display(),
                    input.display()
                )
            })?;
        }
    }

    Ok(())
}
