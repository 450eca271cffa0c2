use crate::core::errors::FractalError;

/// Maps a divergence time to an 8-bit intensity.
pub trait IntensityMap {
    fn map(&self, iterations: u32) -> Result<u8, FractalError>;
}
