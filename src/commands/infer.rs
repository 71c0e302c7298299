//! Infer command handler.

use super::args::{InferArgs, OutputFormat, SamplingArgs};
use anyhow::Context;
use grid_core::{FieldConfig, Row};
use schema_infer::{InferenceConfig, SchemaInferencer};

/// Build the inference configuration from `--config`, then apply flag overrides.
///
/// Precedence, lowest first: defaults, config file, `--policy`, individual
/// `--sample-*` and `--currency` flags.
pub fn resolve_config(args: &SamplingArgs) -> anyhow::Result<InferenceConfig> {
    let mut config = match &args.config {
        Some(path) => InferenceConfig::from_file(path)
            .with_context(|| format!("Failed to load inference config from {path:?}"))?,
        None => InferenceConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.sampling = policy.into();
    }
    if let Some(fraction) = args.sample_fraction {
        config.sampling.fraction = fraction;
    }
    if let Some(min) = args.sample_min {
        config.sampling.min = min;
    }
    if let Some(max) = args.sample_max {
        config.sampling.max = Some(max);
    }
    if let Some(currency) = &args.currency {
        config.currency = currency.clone();
    }

    config
        .sampling
        .validate()
        .context("Invalid sampling options")?;
    Ok(config)
}

/// Parse a JSON array of records and infer their field configurations.
pub fn infer_from_json(json: &str, config: InferenceConfig) -> anyhow::Result<Vec<FieldConfig>> {
    let rows = Row::parse_json_array(json).context("Input must be a JSON array of objects")?;
    Ok(SchemaInferencer::new(config).infer(&rows))
}

/// Encode configurations in the requested format.
pub fn encode_configs(configs: &[FieldConfig], format: OutputFormat) -> anyhow::Result<String> {
    let encoded = match format {
        OutputFormat::Json => serde_json::to_string_pretty(configs)?,
        OutputFormat::Yaml => serde_yaml::to_string(configs)?,
    };
    Ok(encoded)
}

/// Run the infer command.
pub async fn run_infer(args: InferArgs) -> anyhow::Result<()> {
    let config = resolve_config(&args.sampling)?;
    tracing::info!(
        "Inferring fields from {:?} (fraction={}, min={}, max={:?})",
        args.input,
        config.sampling.fraction,
        config.sampling.min,
        config.sampling.max
    );

    let json = tokio::fs::read_to_string(&args.input)
        .await
        .with_context(|| format!("Failed to read input file: {:?}", args.input))?;

    let configs = infer_from_json(&json, config)?;
    println!("{}", encode_configs(&configs, args.format)?);
    Ok(())
}
