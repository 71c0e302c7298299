//! CLI argument definitions.

use chrono::{DateTime, Utc};
use clap::{Args, ValueEnum};
use position_generator::RowCount;
use schema_infer::SamplingPolicy;
use std::path::PathBuf;

/// Named sampling policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// 10% of the records, at least 5 and at most 50
    Standard,
    /// 5% of the records, at least 1, no upper bound
    Compact,
}

impl From<PolicyArg> for SamplingPolicy {
    fn from(policy: PolicyArg) -> Self {
        match policy {
            PolicyArg::Standard => SamplingPolicy::standard(),
            PolicyArg::Compact => SamplingPolicy::compact(),
        }
    }
}

/// Output encoding for inferred configurations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Sampling arguments shared by `infer` and `preview`.
///
/// Each flag overrides the matching value from `--config` or `--policy`.
#[derive(Args, Clone, Debug, Default)]
pub struct SamplingArgs {
    /// Path to an inference config YAML file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Named sampling policy (replaces the policy from --config)
    #[arg(long, value_enum)]
    pub policy: Option<PolicyArg>,

    /// Fraction of records to sample, in (0, 1]
    #[arg(long, env = "BONDGRID_SAMPLE_FRACTION")]
    pub sample_fraction: Option<f64>,

    /// Minimum number of records to sample
    #[arg(long)]
    pub sample_min: Option<usize>,

    /// Maximum number of records to sample
    #[arg(long)]
    pub sample_max: Option<usize>,

    /// ISO 4217 code for currency-formatted fields
    #[arg(long)]
    pub currency: Option<String>,
}

/// Arguments for `bondgrid generate`.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Number of positions to generate
    #[arg(long, env = "BONDGRID_ROW_COUNT", default_value = "1000")]
    pub row_count: RowCount,

    /// Random seed for reproducible output (same seed + as-of = same data)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Fixed generation time (RFC 3339); defaults to now
    #[arg(long)]
    pub as_of: Option<DateTime<Utc>>,

    /// Output file (stdout when omitted)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

/// Arguments for `bondgrid infer`.
#[derive(Args, Clone, Debug)]
pub struct InferArgs {
    /// JSON file holding an array of records
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Output encoding
    #[arg(long, value_enum, default_value = "json")]
    pub format: OutputFormat,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}

/// Arguments for `bondgrid preview`.
#[derive(Args, Clone, Debug)]
pub struct PreviewArgs {
    /// Number of positions to generate
    #[arg(long, env = "BONDGRID_ROW_COUNT", default_value = "100")]
    pub row_count: RowCount,

    /// Number of rows to render
    #[arg(long, default_value = "10")]
    pub rows: usize,

    /// Random seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub sampling: SamplingArgs,
}
