//! Escape-time rendering of the Mandelbrot set and of zoom sequences into it.
//!
//! The pure core lives in `core`: viewports resolve to complex regions,
//! regions evaluate to fields of divergence times, fields normalize to 8-bit
//! intensities. Controllers drive the core and hand results to presenters.

mod config;
mod controllers;
mod core;
mod presenters;

pub use config::{ConfigError, RegionSettings, RenderConfig, RenderSettings};
pub use controllers::cli::image::ImageController;
pub use controllers::cli::zoom::ZoomController;
pub use controllers::errors::RenderError;
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::render_frame::{RenderedFrame, evaluate_region, render_region, render_viewport};
pub use crate::core::actions::generate_field::generate_field::generate_field;
pub use crate::core::actions::generate_field::generate_field_chunked::{
    ChunkSchedule, generate_field_chunked,
};
pub use crate::core::actions::generate_field::generate_field_parallel_rayon::generate_field_parallel_rayon;
pub use crate::core::actions::generate_field::ports::field_algorithm::FieldAlgorithm;
pub use crate::core::actions::normalize_field::normalize_field::normalize_field;
pub use crate::core::actions::normalize_field::ports::intensity_map::IntensityMap;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_region::ComplexRegion;
pub use crate::core::data::field::Field;
pub use crate::core::data::normalized_field::NormalizedField;
pub use crate::core::data::pixel_rect::PixelRect;
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::Viewport;
pub use crate::core::errors::FractalError;
pub use crate::core::fractals::mandelbrot::algorithm::{
    ESCAPE_RADIUS_SQUARED, MandelbrotAlgorithm, escape_time,
};
pub use crate::core::fractals::mandelbrot::intensity_map::InvertedGrayscale;
pub use crate::core::util::calculate_column_chunks::calculate_column_chunks;
pub use crate::core::util::pixel_to_complex_coords::{pixel_to_complex_coords, sample_imag, sample_real};
pub use crate::core::util::viewport_to_complex_region::{BASE_RADIUS, viewport_to_complex_region};
pub use crate::core::zoom::zoom_sequence::{ZoomFrames, ZoomSequence};
pub use presenters::file::ppm::PpmFilePresenter;
