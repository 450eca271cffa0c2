use crate::core::data::complex::Complex;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;

/// A logical view into the complex plane.
///
/// `zoom = 1.0` is the base scale. Resolve it to concrete bounds with
/// [`viewport_to_complex_region`](crate::core::util::viewport_to_complex_region::viewport_to_complex_region).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    pub center: Complex,
    pub zoom: f64,
    pub aspect_ratio: f64,
    pub pixel_width: u32,
    pub pixel_height: u32,
}

impl Viewport {
    /// A viewport whose aspect ratio follows its pixel dimensions.
    #[must_use]
    pub fn for_pixels(center: Complex, zoom: f64, pixel_width: u32, pixel_height: u32) -> Self {
        Self {
            center,
            zoom,
            aspect_ratio: f64::from(pixel_width) / f64::from(pixel_height),
            pixel_width,
            pixel_height,
        }
    }

    pub fn pixel_rect(&self) -> Result<PixelRect, FractalError> {
        PixelRect::full(self.pixel_width, self.pixel_height)
    }

    /// Moves the centre by `steps` multiples of `step / zoom`, so a pan
    /// covers the same share of the view at every zoom level.
    #[must_use]
    pub fn panned(&self, steps_real: f64, steps_imag: f64, step: f64) -> Self {
        let distance = step / self.zoom;

        Self {
            center: Complex::new(
                self.center.real + steps_real * distance,
                self.center.imag + steps_imag * distance,
            ),
            ..*self
        }
    }

    #[must_use]
    pub fn zoomed_by(&self, factor: f64) -> Self {
        Self {
            zoom: self.zoom * factor,
            ..*self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_pixels_derives_aspect_ratio() {
        let viewport = Viewport::for_pixels(Complex::ZERO, 1.0, 1920, 1080);

        assert_eq!(viewport.aspect_ratio, 1920.0 / 1080.0);
        assert_eq!(viewport.pixel_rect().unwrap().size(), 1920 * 1080);
    }

    #[test]
    fn test_panned_scales_with_zoom() {
        let viewport = Viewport::for_pixels(Complex::ZERO, 4.0, 8, 8);
        let moved = viewport.panned(1.0, -2.0, 0.1);

        assert_eq!(moved.center, Complex::new(0.025, -0.05));
        assert_eq!(moved.zoom, 4.0);
    }

    #[test]
    fn test_zoomed_by_keeps_center() {
        let center = Complex::new(-0.5, 0.25);
        let viewport = Viewport::for_pixels(center, 2.0, 8, 8).zoomed_by(0.5);

        assert_eq!(viewport.zoom, 1.0);
        assert_eq!(viewport.center, center);
    }

    #[test]
    fn test_zero_pixel_dimensions_have_no_pixel_rect() {
        let viewport = Viewport::for_pixels(Complex::ZERO, 1.0, 0, 8);

        assert!(viewport.pixel_rect().is_err());
    }
}
