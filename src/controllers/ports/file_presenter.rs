use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::data::normalized_field::NormalizedField;

#[derive(Debug, Error)]
pub enum PresentError {
    #[error("failed to write {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persists a normalized field as an image file.
pub trait FilePresenterPort {
    /// File extension, without the dot, of the images this presenter writes.
    fn extension(&self) -> &str;

    fn present(&self, field: &NormalizedField, filepath: &Path) -> Result<(), PresentError>;
}
