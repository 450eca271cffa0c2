use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::data::normalized_field::NormalizedField;

/// Writes binary PPM (P6) images with the intensity copied to all three
/// colour channels.
#[derive(Debug, Clone, Copy, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    fn write_ppm(field: &NormalizedField, filepath: &Path) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);

        // P6 header: magic, width height, max colour value
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", field.width(), field.height())?;
        writeln!(file, "255")?;
        file.write_all(&field.to_rgb())?;
        file.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn extension(&self) -> &str {
        "ppm"
    }

    fn present(&self, field: &NormalizedField, filepath: &Path) -> Result<(), PresentError> {
        Self::write_ppm(field, filepath).map_err(|source| PresentError::Io {
            path: filepath.to_path_buf(),
            source,
        })
    }
}
