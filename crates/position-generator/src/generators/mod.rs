//! Primitive value generators.
//!
//! These are the leaf draws the position builder composes: bounded numbers,
//! dates offset from a reference day, and identifier strings built from
//! character-class patterns.

pub mod numeric;
pub mod pattern;
pub mod timestamp;
