use crate::core::data::pixel_rect::PixelRect;
use crate::core::errors::FractalError;

pub type IntensityData = Vec<u8>;

/// Row-major grid of 8-bit grayscale intensities, one per field cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedField {
    pixel_rect: PixelRect,
    data: IntensityData,
}

impl NormalizedField {
    pub fn from_data(pixel_rect: PixelRect, data: IntensityData) -> Result<Self, FractalError> {
        if pixel_rect.size() != data.len() as u64 {
            return Err(FractalError::FieldShapeMismatch {
                width: pixel_rect.width(),
                height: pixel_rect.height(),
            });
        }

        Ok(Self { pixel_rect, data })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixel_rect.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixel_rect.height()
    }

    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Interleaved RGB bytes with each intensity copied to all three channels.
    #[must_use]
    pub fn to_rgb(&self) -> Vec<u8> {
        self.data
            .iter()
            .flat_map(|&intensity| [intensity; 3])
            .collect()
    }
}
