use std::ops::Range;

use crate::core::data::complex::Complex;
use crate::core::errors::FractalError;

/// An axis-aligned rectangle of the complex plane.
///
/// Bounds are finite and `re_min < re_max`, `im_min < im_max` always hold.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRegion {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl ComplexRegion {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, FractalError> {
        let width = re_max - re_min;
        let height = im_max - im_min;
        let bounds_finite = [re_min, re_max, im_min, im_max]
            .iter()
            .all(|bound| bound.is_finite());

        // NaN fails the comparison too
        let width_ok = width > 0.0 && width.is_finite();
        let height_ok = height > 0.0 && height.is_finite();

        if !bounds_finite || !width_ok || !height_ok {
            return Err(FractalError::InvalidRegion { width, height });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.im_max - self.im_min
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.re_min <= point.real
            && self.im_min <= point.imag
            && self.re_max >= point.real
            && self.im_max >= point.imag
    }

    /// The narrower real-axis strip covered by `columns` of a grid
    /// `pixel_width` samples wide. The imaginary range is unchanged.
    pub fn column_strip(
        &self,
        columns: Range<u32>,
        pixel_width: u32,
    ) -> Result<Self, FractalError> {
        let width = f64::from(pixel_width);
        let re_min = self.re_min + (f64::from(columns.start) / width) * self.width();
        let re_max = self.re_min + (f64::from(columns.end) / width) * self.width();

        Self::new(re_min, re_max, self.im_min, self.im_max)
    }
}
