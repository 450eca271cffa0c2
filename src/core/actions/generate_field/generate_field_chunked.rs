use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::data::field::{Field, FieldData};
use crate::core::errors::FractalError;
use crate::core::util::calculate_column_chunks::calculate_column_chunks;

/// How column chunks are scheduled relative to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkSchedule {
    /// One chunk at a time. Each row batch holds at most `chunk_size`
    /// samples in flight.
    #[default]
    Sequential,
    /// All chunks at once on the rayon pool.
    Parallel,
}

/// Evaluates the algorithm's whole grid as vertical strips of at most
/// `chunk_size` columns.
///
/// Every strip writes straight into its columns of the one output buffer,
/// and samples the parent grid's coordinates, so the result is
/// bit-identical to evaluating the grid in one piece.
pub fn generate_field_chunked<Alg>(
    algorithm: &Alg,
    chunk_size: u32,
    schedule: ChunkSchedule,
) -> Result<Field, FractalError>
where
    Alg: FieldAlgorithm + Sync,
{
    let grid = algorithm.grid();
    let width = grid.width();
    let first_row = grid.top_left().y;
    let first_column = grid.top_left().x;
    let chunks = calculate_column_chunks(width, chunk_size)?;

    debug!(
        chunks = chunks.len(),
        chunk_size,
        ?schedule,
        "evaluating field in column chunks"
    );

    let region = algorithm.region();
    for columns in &chunks {
        // Strips narrower than f64 resolution still render from the parent lattice
        if let Ok(strip) = region.column_strip(columns.clone(), width) {
            debug!(
                start = columns.start,
                end = columns.end,
                re_min = strip.re_min(),
                re_max = strip.re_max(),
                "chunk sub-region"
            );
        }
    }

    let mut data: FieldData = vec![0; grid.size() as usize];

    match schedule {
        ChunkSchedule::Sequential => {
            for columns in &chunks {
                let cells = columns.start as usize..columns.end as usize;
                data.par_chunks_exact_mut(width as usize)
                    .enumerate()
                    .for_each(|(offset, row)| {
                        algorithm.fill_row(
                            first_row + offset as u32,
                            first_column + columns.start,
                            &mut row[cells.clone()],
                        );
                    });
            }
        }
        ChunkSchedule::Parallel => {
            data.par_chunks_exact_mut(width as usize)
                .enumerate()
                .for_each(|(offset, row)| {
                    row.par_chunks_mut(chunk_size as usize)
                        .enumerate()
                        .for_each(|(index, cells)| {
                            algorithm.fill_row(
                                first_row + offset as u32,
                                first_column + index as u32 * chunk_size,
                                cells,
                            );
                        });
                });
        }
    }

    Field::from_data(grid, algorithm.max_iterations(), data)
}
