//! Core types for the bondgrid framework.
//!
//! This crate provides the foundational types shared by the record generator
//! and the schema inferencer:
//!
//! - [`FieldValue`] - Loosely typed scalar/nested value held by a record
//! - [`Row`] - Ordered flat mapping of field name to [`FieldValue`]
//! - [`FieldConfig`] - Inferred display/filter/format descriptor for one field
//!
//! # Architecture
//!
//! ```text
//! grid-core (this crate)
//!    │
//!    ├─── position-generator  (produces Positions, converts them to Rows)
//!    │
//!    └─── schema-infer        (samples Rows, produces FieldConfigs)
//! ```
//!
//! # Example
//!
//! ```rust
//! use grid_core::{FieldValue, Row};
//!
//! let mut row = Row::new();
//! row.insert("price", FieldValue::Float64(101.25));
//! row.insert("currency", FieldValue::from("USD"));
//!
//! assert_eq!(row.len(), 2);
//! assert_eq!(row.get("price").and_then(FieldValue::as_f64), Some(101.25));
//! ```

pub mod field;
pub mod values;

// Re-exports for convenience
pub use field::{EditorKind, FieldConfig, FieldFormat, FieldKind, FilterKind};
pub use values::{FieldValue, Row, ValueError};
