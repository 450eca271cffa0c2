use std::ops::Range;

use crate::core::errors::FractalError;

/// Splits the columns `0..pixel_width` into contiguous runs of at most
/// `chunk_size` columns. Only the last run may be shorter.
pub fn calculate_column_chunks(
    pixel_width: u32,
    chunk_size: u32,
) -> Result<Vec<Range<u32>>, FractalError> {
    if chunk_size == 0 {
        return Err(FractalError::InvalidChunkSize { chunk_size: 0 });
    }

    Ok((0..pixel_width)
        .step_by(chunk_size as usize)
        .map(|start| start..start.saturating_add(chunk_size).min(pixel_width))
        .collect())
}
