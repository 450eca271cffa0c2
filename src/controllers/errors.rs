use thiserror::Error;

use crate::controllers::ports::file_presenter::PresentError;
use crate::core::errors::FractalError;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error(transparent)]
    Fractal(#[from] FractalError),

    #[error(transparent)]
    Present(#[from] PresentError),

    #[error("failed to create output directory")]
    OutputDirectory(#[source] std::io::Error),
}
