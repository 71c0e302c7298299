//! Generate command handler.

use super::args::GenerateArgs;
use anyhow::Context;
use chrono::{DateTime, Utc};
use position_generator::export::{to_pretty_json, write_json};
use position_generator::{Position, PositionGenerator, RowCount};

/// Generate positions for the given options.
///
/// Without a seed the generator is seeded from system entropy.
pub fn generate_positions(
    count: RowCount,
    seed: Option<u64>,
    as_of: Option<DateTime<Utc>>,
) -> Vec<Position> {
    let generator = match seed {
        Some(seed) => PositionGenerator::seeded(seed),
        None => PositionGenerator::new(),
    };
    let mut generator = match as_of {
        Some(as_of) => generator.with_as_of(as_of),
        None => generator,
    };
    generator.positions(count.get()).collect()
}

/// Run the generate command.
pub async fn run_generate(args: GenerateArgs) -> anyhow::Result<()> {
    tracing::info!(
        "Generating {} positions (seed={:?})",
        args.row_count,
        args.seed
    );

    let GenerateArgs {
        row_count,
        seed,
        as_of,
        output,
    } = args;

    // Large runs are CPU bound; keep them off the async workers
    let positions =
        tokio::task::spawn_blocking(move || generate_positions(row_count, seed, as_of))
            .await
            .context("Position generation task failed")?;

    match output {
        Some(path) => {
            let size = write_json(&path, &positions)
                .with_context(|| format!("Failed to write positions to {path:?}"))?;
            tracing::info!("Wrote {} bytes to {:?}", size, path);
        }
        None => {
            let json = to_pretty_json(&positions).context("Failed to serialize positions")?;
            println!("{json}");
        }
    }

    Ok(())
}
