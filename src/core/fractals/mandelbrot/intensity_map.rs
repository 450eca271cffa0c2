use crate::core::actions::normalize_field::ports::intensity_map::IntensityMap;
use crate::core::errors::FractalError;

/// `255 - floor(divtime * 255 / max_iterations)`.
///
/// Samples that escape immediately are white, samples that never escape are
/// black. With a zero budget every cell is the sentinel and maps to black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvertedGrayscale {
    max_iterations: u32,
}

impl InvertedGrayscale {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl IntensityMap for InvertedGrayscale {
    fn map(&self, iterations: u32) -> Result<u8, FractalError> {
        if iterations > self.max_iterations {
            return Err(FractalError::IterationsExceedMax {
                iterations,
                max_iterations: self.max_iterations,
            });
        }

        if self.max_iterations == 0 {
            return Ok(0);
        }

        let scaled = u64::from(iterations) * 255 / u64::from(self.max_iterations);
        Ok(255 - scaled as u8)
    }
}
