//! File-to-file convenience wrappers over the codec.
//!
//! These buffer the whole input, so the padding count is known before any
//! byte is written and no header backfill is needed. Empty files map to
//! empty files in both directions.

use std::fs;
use std::path::Path;

use log::debug;

use crate::codec::{compress, decompress};
use crate::error::Result;

/// Compresses the file at `input` and writes the container to `output`.
pub fn compress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let data = fs::read(input.as_ref())?;
    let packed = compress(&data)?;
    debug!(
        "compressed {} into {} bytes",
        input.as_ref().display(),
        packed.len()
    );
    fs::write(output.as_ref(), packed)?;
    Ok(())
}

/// Decompresses the container at `input` and writes the original bytes to
/// `output`.
pub fn decompress_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    let packed = fs::read(input.as_ref())?;
    let data = decompress(&packed)?;
    debug!(
        "decompressed {} into {} bytes",
        input.as_ref().display(),
        data.len()
    );
    fs::write(output.as_ref(), data)?;
    Ok(())
}
