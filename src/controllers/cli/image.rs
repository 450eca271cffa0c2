use std::path::Path;

use tracing::info;

use crate::config::RenderConfig;
use crate::controllers::errors::RenderError;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::render_frame::render_region;
use crate::core::data::normalized_field::NormalizedField;

/// Renders a single still of the configured region.
pub struct ImageController<P: FilePresenterPort> {
    presenter: P,
    config: RenderConfig,
    field: Option<NormalizedField>,
}

impl<P: FilePresenterPort> ImageController<P> {
    pub fn new(presenter: P, config: RenderConfig) -> Self {
        Self {
            presenter,
            config,
            field: None,
        }
    }

    pub fn generate(&mut self) -> Result<&NormalizedField, RenderError> {
        let config = &self.config;
        let region = config.region();

        info!(
            width = config.pixel_width(),
            height = config.pixel_height(),
            max_iterations = config.max_iterations(),
            re_min = region.re_min(),
            re_max = region.re_max(),
            im_min = region.im_min(),
            im_max = region.im_max(),
            "rendering Mandelbrot image"
        );

        let frame = render_region(region, config.pixel_width(), config.pixel_height(), config)?;
        info!(duration = ?frame.render_duration, "image rendered");

        Ok(&*self.field.insert(frame.field))
    }

    /// Writes the last generated image. Does nothing before `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderError> {
        if let Some(field) = &self.field {
            self.presenter.present(field, filepath.as_ref())?;
            info!(path = %filepath.as_ref().display(), "image saved");
        }

        Ok(())
    }
}
