use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::viewport::Viewport;
use crate::core::errors::FractalError;

/// Half-height of the region shown at `zoom = 1.0`.
pub const BASE_RADIUS: f64 = 1.5;

/// Resolves a viewport into the region `center ± (half_width, half_height)`
/// where `half_height = base_radius / zoom` and
/// `half_width = half_height * aspect_ratio`.
pub fn viewport_to_complex_region(
    viewport: &Viewport,
    base_radius: f64,
) -> Result<ComplexRegion, FractalError> {
    if !viewport.zoom.is_finite() || viewport.zoom <= 0.0 {
        return Err(FractalError::InvalidZoom {
            zoom: viewport.zoom,
        });
    }

    if !viewport.aspect_ratio.is_finite() || viewport.aspect_ratio <= 0.0 {
        return Err(FractalError::InvalidAspectRatio {
            aspect_ratio: viewport.aspect_ratio,
        });
    }

    let half_height = base_radius / viewport.zoom;
    let half_width = half_height * viewport.aspect_ratio;
    let center = viewport.center;

    ComplexRegion::new(
        center.real - half_width,
        center.real + half_width,
        center.imag - half_height,
        center.imag + half_height,
    )
}
