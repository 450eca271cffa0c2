use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::RenderConfig;
use crate::controllers::errors::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_frame::render_viewport;
use crate::core::zoom::zoom_sequence::ZoomSequence;

/// Renders a zoom sequence frame by frame and hands each frame to the
/// presenter as `frame_{index:04}.<ext>` in the output directory.
///
/// File names sort in frame order, which is what downstream video
/// assemblers rely on.
pub struct ZoomController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
}

impl<P: FilePresenterPort> ZoomController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self { presenter, config }
    }

    pub fn sequence(&self) -> Result<ZoomSequence, RenderError> {
        Ok(ZoomSequence::new(
            self.config.center(),
            self.config.zoom_factor(),
            self.config.num_frames(),
            self.config.pixel_width(),
            self.config.pixel_height(),
        )?)
    }

    #[must_use]
    pub fn frame_path(&self, output_dir: &Path, index: u32) -> PathBuf {
        output_dir.join(format!("frame_{index:04}.{}", self.presenter.extension()))
    }

    /// Renders every frame and returns the written paths in frame order.
    pub fn run(&self, output_dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, RenderError> {
        let output_dir = output_dir.as_ref();
        let sequence = self.sequence()?;

        std::fs::create_dir_all(output_dir).map_err(RenderError::OutputDirectory)?;

        info!(
            frames = sequence.len(),
            zoom_factor = sequence.zoom_factor(),
            width = self.config.pixel_width(),
            height = self.config.pixel_height(),
            max_iterations = self.config.max_iterations(),
            "rendering zoom sequence"
        );

        let mut paths = Vec::with_capacity(sequence.len() as usize);

        for (index, viewport) in (0..).zip(sequence.iter()) {
            let frame = render_viewport(&viewport, &self.config)?;
            let path = self.frame_path(output_dir, index);

            self.presenter.present(&frame.field, &path)?;
            info!(
                frame = index,
                zoom = viewport.zoom,
                duration = ?frame.render_duration,
                "frame rendered"
            );

            paths.push(path);
        }

        Ok(paths)
    }
}
