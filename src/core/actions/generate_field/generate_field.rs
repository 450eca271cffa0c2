use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::field::{Field, FieldData};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;

/// Evaluates `window` row by row on the calling thread.
pub fn generate_field<Alg: FieldAlgorithm>(
    window: PixelRect,
    algorithm: &Alg,
) -> Result<Field, FractalError> {
    window.ensure_within(algorithm.grid())?;

    let mut data: FieldData = vec![0; window.size() as usize];

    for (row, out) in window
        .rows()
        .zip(data.chunks_exact_mut(window.width() as usize))
    {
        algorithm.fill_row(row, window.top_left().x, out);
    }

    Field::from_data(window, algorithm.max_iterations(), data)
}
