//! Heuristic field configuration inference for bondgrid.
//!
//! Given loosely typed records, the [`SchemaInferencer`] inspects a leading
//! sample, discovers every key in it and derives a [`grid_core::FieldConfig`]
//! per key: a label, a classification, and the filter, editor and display
//! format that suit it.
//!
//! # Sampling
//!
//! The sample is the first `clamp(ceil(len × fraction), min, max)` records.
//! [`SamplingPolicy::standard`] (10 %, min 5, max 50) is the default;
//! [`SamplingPolicy::compact`] (5 %, min 1, unbounded) is available for
//! callers that want a lighter pass.
//!
//! # Example
//!
//! ```rust
//! use grid_core::{FieldKind, Row};
//! use schema_infer::infer;
//!
//! let rows = vec![
//!     Row::new().with("active", true).with("price", 101.5),
//!     Row::new().with("active", "false").with("price", 99.0),
//! ];
//!
//! let configs = infer(&rows);
//! assert_eq!(configs[0].kind, FieldKind::Boolean);
//! assert_eq!(configs[1].label, "Price");
//! ```

pub mod classify;
pub mod config;
pub mod detect;
pub mod error;
pub mod inferencer;
pub mod label;
pub mod render;

// Re-exports for convenience
pub use classify::classify_field;
pub use config::{InferenceConfig, SamplingPolicy};
pub use error::InferenceError;
pub use inferencer::{discover_keys, infer, SchemaInferencer};
pub use label::format_label;
pub use render::RenderValue;
