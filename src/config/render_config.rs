use crate::core::actions::generate_field::generate_field_chunked::ChunkSchedule;
use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::viewport::Viewport;

/// Validated render parameters. Build one through
/// [`RenderSettings::validate`](super::RenderSettings::validate).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub(super) pixel_width: u32,
    pub(super) pixel_height: u32,
    pub(super) center: Complex,
    pub(super) max_iterations: u32,
    pub(super) zoom_factor: f64,
    pub(super) num_frames: u32,
    pub(super) chunk_size: Option<u32>,
    pub(super) chunk_schedule: ChunkSchedule,
    pub(super) base_radius: f64,
    pub(super) region: ComplexRegion,
}

impl RenderConfig {
    #[must_use]
    pub fn pixel_width(&self) -> u32 {
        self.pixel_width
    }

    #[must_use]
    pub fn pixel_height(&self) -> u32 {
        self.pixel_height
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        self.center
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn num_frames(&self) -> u32 {
        self.num_frames
    }

    #[must_use]
    pub fn chunk_size(&self) -> Option<u32> {
        self.chunk_size
    }

    #[must_use]
    pub fn chunk_schedule(&self) -> ChunkSchedule {
        self.chunk_schedule
    }

    #[must_use]
    pub fn base_radius(&self) -> f64 {
        self.base_radius
    }

    /// Explicit region rendered by the still-image command.
    #[must_use]
    pub fn region(&self) -> ComplexRegion {
        self.region
    }

    /// The unzoomed view around the configured centre.
    #[must_use]
    pub fn base_viewport(&self) -> Viewport {
        Viewport::for_pixels(self.center, 1.0, self.pixel_width, self.pixel_height)
    }
}
