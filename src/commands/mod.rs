//! Command handlers.
//!
//! This module contains handlers for the generate, infer and preview commands.

pub mod args;
pub mod generate;
pub mod infer;
pub mod preview;

pub use args::{GenerateArgs, InferArgs, OutputFormat, PolicyArg, PreviewArgs, SamplingArgs};
pub use generate::run_generate;
pub use infer::run_infer;
pub use preview::run_preview;
