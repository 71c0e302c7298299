//! JSON export of generated positions.

use crate::{GeneratorError, Position};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Default buffer size for file output.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Serialize positions as pretty-printed JSON (2-space indentation).
pub fn to_pretty_json(positions: &[Position]) -> Result<String, GeneratorError> {
    Ok(serde_json::to_string_pretty(positions)?)
}

/// Write positions as pretty-printed JSON to `writer`.
pub fn write_pretty_json<W: Write>(writer: W, positions: &[Position]) -> Result<(), GeneratorError> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, positions)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write positions as pretty-printed JSON to a file, returning its size in bytes.
pub fn write_json<P: AsRef<Path>>(path: P, positions: &[Position]) -> Result<u64, GeneratorError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_pretty_json(BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file), positions)?;

    let size = std::fs::metadata(path)?.len();
    info!(
        "Exported {} positions to '{}' ({} bytes)",
        positions.len(),
        path.display(),
        size
    );
    Ok(size)
}
