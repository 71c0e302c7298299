//! Synthetic fixed-income position generator for bondgrid.
//!
//! This crate provides the `PositionGenerator`, which fabricates position
//! records with plausible, cross-field-consistent values: catalog draws for
//! descriptors, bounded draws for rates and prices, and derived risk and
//! sizing metrics computed from the draws they depend on.
//!
//! # Architecture
//!
//! ```text
//! PositionGenerator
//! ┌─────────────────┐
//! │  - rng (StdRng) │
//! │  - next_id      │
//! │  - as_of        │
//! └────────┬────────┘
//!          │  per record
//!          ▼
//!   Primaries ──► Derived ──► Position { id, ..., lastUpdate }
//! ```
//!
//! # Example
//!
//! ```rust
//! use position_generator::{generate, RowCount};
//!
//! let positions = generate(RowCount::new(3));
//! assert_eq!(positions.len(), 3);
//! assert!(positions.iter().all(|p| p.ask_price >= p.bid_price));
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod generator;
pub mod generators;
pub mod position;

// Re-exports for convenience
pub use error::GeneratorError;
pub use generator::{generate, generate_checked, PositionGenerator, PositionIterator, RowCount};
pub use position::{positions_to_rows, Position};
