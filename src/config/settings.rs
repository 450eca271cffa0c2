use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::errors::ConfigError;
use crate::config::render_config::RenderConfig;
use crate::core::actions::generate_field::generate_field_chunked::ChunkSchedule;
use crate::core::data::complex::Complex;
use crate::core::data::complex_region::ComplexRegion;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;
use crate::core::util::viewport_to_complex_region::{BASE_RADIUS, viewport_to_complex_region};
use crate::core::zoom::zoom_sequence::ZoomSequence;

const DEFAULT_PIXEL_WIDTH: u32 = 1920;
const DEFAULT_PIXEL_HEIGHT: u32 = 1080;
const DEFAULT_MAX_ITERATIONS: i64 = 1000;
const DEFAULT_ZOOM_FACTOR: f64 = 1.1;
const DEFAULT_NUM_FRAMES: u32 = 60;

// Deep in the seahorse valley
const DEFAULT_CENTER: Complex = Complex::new(-0.743643887037151, 0.131825904205330);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegionSettings {
    pub re_min: f64,
    pub re_max: f64,
    pub im_min: f64,
    pub im_max: f64,
}

impl Default for RegionSettings {
    fn default() -> Self {
        Self {
            re_min: -2.0,
            re_max: 1.0,
            im_min: -1.5,
            im_max: 1.5,
        }
    }
}

/// Unvalidated render parameters as read from a file or the command line.
///
/// Integer budgets are signed so out-of-range values surface as
/// [`FractalError`]s from [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub pixel_width: u32,
    pub pixel_height: u32,
    pub center: Complex,
    pub max_iterations: i64,
    pub zoom_factor: f64,
    pub num_frames: u32,
    pub chunk_size: Option<i64>,
    pub chunk_schedule: ChunkSchedule,
    pub base_radius: f64,
    pub region: RegionSettings,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            center: DEFAULT_CENTER,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            num_frames: DEFAULT_NUM_FRAMES,
            chunk_size: None,
            chunk_schedule: ChunkSchedule::default(),
            base_radius: BASE_RADIUS,
            region: RegionSettings::default(),
        }
    }
}

impl RenderSettings {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_json_str(&json)
    }

    /// Checks the parameters every render uses: dimensions, budgets and
    /// the still-image region. Zoom parameters are left to
    /// [`validate_zoom`](Self::validate_zoom).
    pub fn validate(&self) -> Result<RenderConfig, FractalError> {
        let max_iterations = u32::try_from(self.max_iterations).map_err(|_| {
            FractalError::InvalidIterationBudget {
                max_iterations: self.max_iterations,
            }
        })?;

        let chunk_size = self
            .chunk_size
            .map(|chunk_size| match u32::try_from(chunk_size) {
                Ok(size) if size > 0 => Ok(size),
                _ => Err(FractalError::InvalidChunkSize { chunk_size }),
            })
            .transpose()?;

        PixelRect::full(self.pixel_width, self.pixel_height)?;

        let region = ComplexRegion::new(
            self.region.re_min,
            self.region.re_max,
            self.region.im_min,
            self.region.im_max,
        )?;

        Ok(RenderConfig {
            pixel_width: self.pixel_width,
            pixel_height: self.pixel_height,
            center: self.center,
            max_iterations,
            zoom_factor: self.zoom_factor,
            num_frames: self.num_frames,
            chunk_size,
            chunk_schedule: self.chunk_schedule,
            base_radius: self.base_radius,
            region,
        })
    }

    /// [`validate`](Self::validate) plus the zoom factor, frame count,
    /// centre and base radius a zoom sequence needs.
    pub fn validate_zoom(&self) -> Result<RenderConfig, FractalError> {
        let config = self.validate()?;

        let sequence = ZoomSequence::new(
            self.center,
            self.zoom_factor,
            self.num_frames,
            self.pixel_width,
            self.pixel_height,
        )?;

        // The first frame must resolve
        if let Some(first) = sequence.frame(0) {
            viewport_to_complex_region(&first, self.base_radius)?;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_validate() {
        let config = RenderSettings::default().validate_zoom().unwrap();

        assert_eq!(config.pixel_width(), 1920);
        assert_eq!(config.pixel_height(), 1080);
        assert_eq!(config.max_iterations(), 1000);
        assert_eq!(config.num_frames(), 60);
        assert_eq!(config.zoom_factor(), 1.1);
        assert_eq!(config.chunk_size(), None);
        assert_eq!(config.base_radius(), 1.5);
        assert_eq!(config.center(), DEFAULT_CENTER);
        assert_eq!(
            config.region(),
            ComplexRegion::new(-2.0, 1.0, -1.5, 1.5).unwrap()
        );
    }

    #[test]
    fn test_negative_iteration_budget_is_rejected() {
        let settings = RenderSettings {
            max_iterations: -1,
            ..RenderSettings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(FractalError::InvalidIterationBudget { max_iterations: -1 })
        );
    }

    #[test]
    fn test_zero_iteration_budget_is_allowed() {
        let settings = RenderSettings {
            max_iterations: 0,
            ..RenderSettings::default()
        };

        assert_eq!(settings.validate().unwrap().max_iterations(), 0);
    }

    #[test]
    fn test_non_positive_chunk_size_is_rejected() {
        for chunk_size in [0, -5] {
            let settings = RenderSettings {
                chunk_size: Some(chunk_size),
                ..RenderSettings::default()
            };

            assert_eq!(
                settings.validate(),
                Err(FractalError::InvalidChunkSize { chunk_size })
            );
        }
    }

    #[test]
    fn test_bad_zoom_factor_is_rejected() {
        let settings = RenderSettings {
            zoom_factor: 0.9,
            ..RenderSettings::default()
        };

        assert_eq!(
            settings.validate_zoom(),
            Err(FractalError::InvalidZoomFactor { zoom_factor: 0.9 })
        );
    }

    #[test]
    fn test_bad_base_radius_is_rejected() {
        let settings = RenderSettings {
            base_radius: 0.0,
            ..RenderSettings::default()
        };

        assert!(matches!(
            settings.validate_zoom(),
            Err(FractalError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_still_image_ignores_zoom_parameters() {
        let settings = RenderSettings {
            zoom_factor: 1.0,
            num_frames: 0,
            base_radius: 0.0,
            ..RenderSettings::default()
        };

        assert!(settings.validate().is_ok());
        assert_eq!(
            settings.validate_zoom(),
            Err(FractalError::InvalidZoomFactor { zoom_factor: 1.0 })
        );
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let settings = RenderSettings {
            pixel_height: 0,
            ..RenderSettings::default()
        };

        assert_eq!(
            settings.validate(),
            Err(FractalError::InvalidDimensions {
                width: 1920,
                height: 0
            })
        );
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = RenderSettings::from_json_str(
            r#"{ "pixel_width": 320, "chunk_size": 64, "chunk_schedule": "parallel",
                 "center": { "real": -0.5, "imag": 0.0 } }"#,
        )
        .unwrap();

        assert_eq!(settings.pixel_width, 320);
        assert_eq!(settings.pixel_height, DEFAULT_PIXEL_HEIGHT);
        assert_eq!(settings.chunk_size, Some(64));
        assert_eq!(settings.chunk_schedule, ChunkSchedule::Parallel);
        assert_eq!(settings.center, Complex::new(-0.5, 0.0));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = RenderSettings::from_json_str("{ \"pixel_width\": -3 }");

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "max_iterations": 256, "num_frames": 3 }}"#).unwrap();

        let settings = RenderSettings::from_json_file(file.path()).unwrap();

        assert_eq!(settings.max_iterations, 256);
        assert_eq!(settings.num_frames, 3);
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = RenderSettings::from_json_file(dir.path().join("missing.json"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
