use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::errors::FractalError;

pub type FieldData = Vec<u32>;

/// Row-major grid of divergence times for one pixel window.
///
/// Every cell lies in `0..=max_iterations`; `max_iterations` itself marks
/// samples that never escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pixel_rect: PixelRect,
    max_iterations: u32,
    data: FieldData,
}

impl Field {
    pub fn from_data(
        pixel_rect: PixelRect,
        max_iterations: u32,
        data: FieldData,
    ) -> Result<Self, FractalError> {
        if pixel_rect.size() != data.len() as u64 {
            return Err(FractalError::FieldShapeMismatch {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
            });
        }

        if let Some(&iterations) = data.iter().find(|&&value| value > max_iterations) {
            return Err(FractalError::IterationsExceedMax {
                iterations,
                max_iterations,
            });
        }

        Ok(Self {
            pixel_rect,
            max_iterations,
            data,
        })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    /// Cell at `point`, relative to the field's own top-left corner.
    #[must_use]
    pub fn get(&self, point: Point) -> Option<u32> {
        if point.x >= self.width() || point.y >= self.height() {
            return None;
        }

        let index = point.y as usize * self.width() as usize + point.x as usize;
        self.data.get(index).copied()
    }

    /// Cells of row `row`, relative to the field's own top edge.
    ///
    /// # Panics
    ///
    /// Panics if `row` is not below `height()`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[u32] {
        let width = self.width() as usize;
        &self.data[row * width..(row + 1) * width]
    }
}
