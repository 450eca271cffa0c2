use thiserror::Error;

/// Precondition failures raised by the core before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum FractalError {
    #[error("complex region size must be positive and finite: {width}x{height}")]
    InvalidRegion { width: f64, height: f64 },

    #[error("zoom must be positive and finite, got {zoom}")]
    InvalidZoom { zoom: f64 },

    #[error("iteration budget must be between 0 and {max}, got {max_iterations}", max = u32::MAX)]
    InvalidIterationBudget { max_iterations: i64 },

    #[error("chunk size must be greater than zero, got {chunk_size}")]
    InvalidChunkSize { chunk_size: i64 },

    #[error("zoom factor must be finite and greater than 1, got {zoom_factor}")]
    InvalidZoomFactor { zoom_factor: f64 },

    #[error("a zoom sequence needs at least one frame")]
    InvalidFrameCount,

    #[error("pixel dimensions must be positive: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("aspect ratio must be positive and finite, got {aspect_ratio}")]
    InvalidAspectRatio { aspect_ratio: f64 },

    #[error(
        "pixel window at x:{x}, y:{y} of size {width}x{height} does not fit a {grid_width}x{grid_height} grid"
    )]
    SpanOutsideGrid {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        grid_width: u32,
        grid_height: u32,
    },

    #[error("iterations {iterations} exceeds maximum {max_iterations}")]
    IterationsExceedMax { iterations: u32, max_iterations: u32 },

    #[error("field chunks do not tile a {width}x{height} field")]
    FieldShapeMismatch { width: u32, height: u32 },
}
