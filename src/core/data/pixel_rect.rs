use std::ops::Range;

use crate::core::data::point::Point;
use crate::core::errors::FractalError;

/// A window of pixels: `width` columns and `height` rows starting at
/// `top_left`. A single row or column is a valid window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    width: u32,
    height: u32,
}

impl PixelRect {
    pub fn new(top_left: Point, width: u32, height: u32) -> Result<Self, FractalError> {
        if width == 0 || height == 0 {
            return Err(FractalError::InvalidDimensions { width, height });
        }

        if top_left.x.checked_add(width).is_none() || top_left.y.checked_add(height).is_none() {
            return Err(FractalError::SpanOutsideGrid {
                x: top_left.x,
                y: top_left.y,
                width,
                height,
                grid_width: u32::MAX,
                grid_height: u32::MAX,
            });
        }

        Ok(Self {
            top_left,
            width,
            height,
        })
    }

    /// The whole `width` x `height` grid anchored at the origin.
    pub fn full(width: u32, height: u32) -> Result<Self, FractalError> {
        Self::new(Point::default(), width, height)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn columns(&self) -> Range<u32> {
        self.top_left.x..self.top_left.x + self.width
    }

    #[must_use]
    pub fn rows(&self) -> Range<u32> {
        self.top_left.y..self.top_left.y + self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.columns().contains(&point.x) && self.rows().contains(&point.y)
    }

    /// Succeeds when this window lies entirely inside `grid`.
    pub fn ensure_within(&self, grid: PixelRect) -> Result<(), FractalError> {
        let fits = self.top_left.x >= grid.top_left.x
            && self.top_left.y >= grid.top_left.y
            && self.columns().end <= grid.columns().end
            && self.rows().end <= grid.rows().end;

        if !fits {
            return Err(FractalError::SpanOutsideGrid {
                x: self.top_left.x,
                y: self.top_left.y,
                width: self.width,
                height: self.height,
                grid_width: grid.width,
                grid_height: grid.height,
            });
        }

        Ok(())
    }
}
