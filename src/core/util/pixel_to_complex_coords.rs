use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;

/// Real part of the sample for column `x` of a grid `width` columns wide.
///
/// Chunked and whole-grid evaluation both sample through here, which keeps
/// their results bit-identical.
#[inline]
#[must_use]
pub fn sample_real(x: u32, width: u32, region: &ComplexRegion) -> f64 {
    region.re_min() + (f64::from(x) / f64::from(width)) * region.width()
}

/// Imaginary part of the sample for row `y` of a grid `height` rows tall.
#[inline]
#[must_use]
pub fn sample_imag(y: u32, height: u32, region: &ComplexRegion) -> f64 {
    region.im_min() + (f64::from(y) / f64::from(height)) * region.height()
}

pub fn pixel_to_complex_coords(
    pixel_position: Point,
    grid: PixelRect,
    region: &ComplexRegion,
) -> Result<Complex, FractalError> {
    if !grid.contains_point(pixel_position) {
        return Err(FractalError::SpanOutsideGrid {
            x: pixel_position.x,
            y: pixel_position.y,
            width: 1,
            height: 1,
            grid_width: grid.width(),
            grid_height: grid.height(),
        });
    }

    let relative_x = pixel_position.x - grid.top_left().x;
    let relative_y = pixel_position.y - grid.top_left().y;

    Ok(Complex::new(
        sample_real(relative_x, grid.width(), region),
        sample_imag(relative_y, grid.height(), region),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region() -> ComplexRegion {
        ComplexRegion::new(-2.0, 2.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_top_left_maps_to_region_minimum() {
        let grid = PixelRect::full(100, 100).unwrap();
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, grid, &region()).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_sampling_is_half_open() {
        let grid = PixelRect::full(4, 4).unwrap();
        let last = pixel_to_complex_coords(Point { x: 3, y: 3 }, grid, &region()).unwrap();

        assert_eq!(last, Complex::new(1.0, 0.5));
    }

    #[test]
    fn test_center_pixel() {
        let grid = PixelRect::full(4, 4).unwrap();
        let result = pixel_to_complex_coords(Point { x: 2, y: 2 }, grid, &region()).unwrap();

        assert_eq!(result, Complex::ZERO);
    }

    #[test]
    fn test_single_pixel_grid_samples_minimum_corner() {
        let grid = PixelRect::full(1, 1).unwrap();
        let result = pixel_to_complex_coords(Point { x: 0, y: 0 }, grid, &region()).unwrap();

        assert_eq!(result, Complex::new(-2.0, -1.0));
    }

    #[test]
    fn test_pixel_outside_grid_fails() {
        let grid = PixelRect::full(100, 100).unwrap();
        let result = pixel_to_complex_coords(Point { x: 150, y: 10 }, grid, &region());

        assert_eq!(
            result,
            Err(FractalError::SpanOutsideGrid {
                x: 150,
                y: 10,
                width: 1,
                height: 1,
                grid_width: 100,
                grid_height: 100,
            })
        );
    }
}
