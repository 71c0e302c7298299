//! bondgrid library
//!
//! Command handlers behind the `bondgrid` binary. The heavy lifting lives in
//! the workspace crates:
//!
//! - `position_generator` - synthetic fixed-income position records
//! - `schema_infer` - grid field configuration inferred from sampled records
//! - `grid_core` - the value, row and field configuration types both share
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate 500 positions and write them to a file
//! bondgrid generate --row-count 500 --output positions.json
//!
//! # Infer field configurations from a JSON array of records
//! bondgrid infer --input positions.json --policy compact
//!
//! # Generate, infer and render the first rows in one step
//! bondgrid preview --row-count 200 --rows 5
//! ```

pub mod commands;

pub use commands::{
    run_generate, run_infer, run_preview, GenerateArgs, InferArgs, OutputFormat, PolicyArg,
    PreviewArgs,
};
