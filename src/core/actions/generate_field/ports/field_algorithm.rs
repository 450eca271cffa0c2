use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_rect::PixelRect;

/// A per-pixel escape-time computation over a fixed sampling grid.
///
/// Rows are independent, so drivers may fill any set of disjoint row
/// slices concurrently.
pub trait FieldAlgorithm {
    /// The whole grid the algorithm samples. Windows passed to the
    /// drivers must lie inside it.
    fn grid(&self) -> PixelRect;

    /// The part of the complex plane the grid covers.
    fn region(&self) -> ComplexRegion;

    /// Upper bound of every produced value.
    fn max_iterations(&self) -> u32;

    /// Writes the cells of `row` for columns `first_column..first_column + out.len()`.
    fn fill_row(&self, row: u32, first_column: u32, out: &mut [u32]);
}
