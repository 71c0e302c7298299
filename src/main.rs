//! Command-line interface for bondgrid
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # 1000 positions to stdout
//! bondgrid generate
//!
//! # Reproducible run written to a file
//! bondgrid generate --row-count 250 --seed 42 --output positions.json
//! ```
//!
//! ## Infer
//! ```bash
//! # Standard sampling (10%, min 5, max 50)
//! bondgrid infer --input positions.json
//!
//! # Sampling from a YAML file, fraction overridden on the command line
//! bondgrid infer --input positions.json --config infer.yaml --sample-fraction 0.2
//! ```
//!
//! ## Preview
//! ```bash
//! bondgrid preview --row-count 100 --rows 5
//! ```
//!
//! Logging is controlled with `RUST_LOG` (e.g. `RUST_LOG=info`).

use bondgrid::{GenerateArgs, InferArgs, PreviewArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bondgrid")]
#[command(about = "Synthetic bond positions and inferred grid field configuration")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic position records as pretty-printed JSON
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Infer field configurations from a JSON array of records
    Infer {
        #[command(flatten)]
        args: InferArgs,
    },

    /// Generate positions, infer their fields and render the first rows
    Preview {
        #[command(flatten)]
        args: PreviewArgs,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => bondgrid::run_generate(args).await,
        Commands::Infer { args } => bondgrid::run_infer(args).await,
        Commands::Preview { args } => bondgrid::run_preview(args).await,
    }
}
