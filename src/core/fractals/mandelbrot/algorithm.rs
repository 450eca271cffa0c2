use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;
use crate::core::util::pixel_to_complex_coords::{sample_imag, sample_real};

/// Squared escape radius; `|z|² > 4` is the same test as `|z| > 2`.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time evaluation of `z ← z² + c` from `z = 0` over a sampling grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MandelbrotAlgorithm {
    region: ComplexRegion,
    grid: PixelRect,
    max_iterations: u32,
}

#[derive(Debug, Clone, Copy)]
struct Sample {
    offset: usize,
    c: Complex,
    z: Complex,
}

impl MandelbrotAlgorithm {
    pub fn new(
        region: ComplexRegion,
        pixel_width: u32,
        pixel_height: u32,
        max_iterations: u32,
    ) -> Result<Self, FractalError> {
        let grid = PixelRect::full(pixel_width, pixel_height)?;

        Ok(Self {
            region,
            grid,
            max_iterations,
        })
    }
}

/// Divergence time of a single sample: the iteration `i` at which
/// `z_{i+1}` first leaves the escape radius, or `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;

    for iteration in 0..max_iterations {
        z = z * z + c;
        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            return iteration;
        }
    }

    max_iterations
}

impl FieldAlgorithm for MandelbrotAlgorithm {
    fn grid(&self) -> PixelRect {
        self.grid
    }

    fn region(&self) -> ComplexRegion {
        self.region
    }

    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    /// Advances the whole row one iteration at a time. Samples that escape
    /// record their divergence time and drop out of the batch, so later
    /// iterations only touch samples still in flight.
    fn fill_row(&self, row: u32, first_column: u32, out: &mut [u32]) {
        out.fill(self.max_iterations);

        let imag = sample_imag(row, self.grid.height(), &self.region);
        let mut active: Vec<Sample> = (0..out.len())
            .map(|offset| Sample {
                offset,
                c: Complex::new(
                    sample_real(first_column + offset as u32, self.grid.width(), &self.region),
                    imag,
                ),
                z: Complex::ZERO,
            })
            .collect();

        for iteration in 0..self.max_iterations {
            if active.is_empty() {
                break;
            }

            active.retain_mut(|sample| {
                sample.z = sample.z * sample.z + sample.c;
                let escaped = sample.z.magnitude_squared() > ESCAPE_RADIUS_SQUARED;
                if escaped {
                    out[sample.offset] = iteration;
                }
                !escaped
            });
        }
    }
}
