//! Preview command handler.
//!
//! Generates positions, infers their field configuration and renders the
//! leading rows through each field's display format as a plain-text table.

use super::args::PreviewArgs;
use super::generate::generate_positions;
use super::infer::resolve_config;
use anyhow::Context;
use grid_core::{FieldConfig, FieldValue, Row};
use position_generator::positions_to_rows;
use schema_infer::{RenderValue, SchemaInferencer};

/// Render `rows` as a table with one column per configuration.
///
/// Headers are the configuration labels; cells are rendered through the
/// configuration's display format. At most `limit` rows are rendered.
pub fn render_table(configs: &[FieldConfig], rows: &[Row], limit: usize) -> String {
    let null = FieldValue::Null;
    let header: Vec<String> = configs.iter().map(|c| c.label.clone()).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .take(limit)
        .map(|row| {
            configs
                .iter()
                .map(|c| c.format.render(row.get(&c.key).unwrap_or(&null)))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            body.iter()
                .map(|cells| cells[i].chars().count())
                .chain(std::iter::once(label.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    out.push_str("| ");
    out.push_str(&padded.join(" | "));
    out.push_str(" |\n");
}

/// Run the preview command.
pub async fn run_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.sampling)?;
    let row_count = args.row_count;
    let seed = args.seed;

    let positions = tokio::task::spawn_blocking(move || generate_positions(row_count, seed, None))
        .await
        .context("Position generation task failed")?;
    let rows = positions_to_rows(&positions).context("Failed to convert positions to rows")?;

    let configs = SchemaInferencer::new(config).infer(&rows);
    tracing::info!(
        "Previewing {} of {} rows across {} fields",
        args.rows.min(rows.len()),
        rows.len(),
        configs.len()
    );

    print!("{}", render_table(&configs, &rows, args.rows));
    Ok(())
}
