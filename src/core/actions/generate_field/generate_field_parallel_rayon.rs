use rayon::prelude::*;

use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::field::{Field, FieldData};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;

/// Evaluates `window` with rows spread over rayon's work-stealing pool.
///
/// Each worker writes only its own row slice of the output buffer, so the
/// result is identical to [`generate_field`](super::generate_field::generate_field)
/// regardless of scheduling.
pub fn generate_field_parallel_rayon<Alg>(
    window: PixelRect,
    algorithm: &Alg,
) -> Result<Field, FractalError>
where
    Alg: FieldAlgorithm + Sync,
{
    window.ensure_within(algorithm.grid())?;

    let first_row = window.top_left().y;
    let first_column = window.top_left().x;
    let mut data: FieldData = vec![0; window.size() as usize];

    data.par_chunks_exact_mut(window.width() as usize)
        .enumerate()
        .for_each(|(offset, out)| {
            algorithm.fill_row(first_row + offset as u32, first_column, out);
        });

    Field::from_data(window, algorithm.max_iterations(), data)
}
