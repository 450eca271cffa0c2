use std::time::{Duration, Instant};

use crate::config::RenderConfig;
use crate::core::actions::generate_field::generate_field_chunked::generate_field_chunked;
use crate::core::actions::generate_field::generate_field_parallel_rayon::generate_field_parallel_rayon;
use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
use crate::core::actions::normalize_field::normalize_field::normalize_field;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::field::Field;
use crate::core::data::normalized_field::NormalizedField;
use crate::core::data::viewport::Viewport;
use crate::core::errors::FractalError;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::intensity_map::InvertedGrayscale;
use crate::core::util::viewport_to_complex_region::viewport_to_complex_region;

#[derive(Debug)]
pub struct RenderedFrame {
    pub region: ComplexRegion,
    pub field: NormalizedField,
    pub render_duration: Duration,
}

/// Escape-time field of `region`, chunked when the config asks for it.
pub fn evaluate_region(
    region: ComplexRegion,
    pixel_width: u32,
    pixel_height: u32,
    config: &RenderConfig,
) -> Result<Field, FractalError> {
    let algorithm = MandelbrotAlgorithm::new(
        region,
        pixel_width,
        pixel_height,
        config.max_iterations(),
    )?;

    match config.chunk_size() {
        Some(chunk_size) => {
            generate_field_chunked(&algorithm, chunk_size, config.chunk_schedule())
        }
        None => generate_field_parallel_rayon(algorithm.grid(), &algorithm),
    }
}

/// Evaluates and normalizes one region.
pub fn render_region(
    region: ComplexRegion,
    pixel_width: u32,
    pixel_height: u32,
    config: &RenderConfig,
) -> Result<RenderedFrame, FractalError> {
    let start = Instant::now();
    let field = evaluate_region(region, pixel_width, pixel_height, config)?;
    let mapper = InvertedGrayscale::new(field.max_iterations());
    let field = normalize_field(&field, &mapper)?;

    Ok(RenderedFrame {
        region,
        field,
        render_duration: start.elapsed(),
    })
}

/// Resolves a viewport and renders it.
pub fn render_viewport(
    viewport: &Viewport,
    config: &RenderConfig,
) -> Result<RenderedFrame, FractalError> {
    let region = viewport_to_complex_region(viewport, config.base_radius())?;

    render_region(region, viewport.pixel_width, viewport.pixel_height, config)
}
