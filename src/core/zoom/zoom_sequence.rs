use std::iter::FusedIterator;

use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;
use crate::core::errors::FractalError;

/// A finite zoom toward a fixed centre: frame `i` has `zoom = zoom_factor^i`,
/// computed by repeated multiplication starting from `1.0`.
///
/// The sequence holds only its parameters. Iterating it twice yields the
/// same viewports in the same order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSequence {
    center: Complex,
    zoom_factor: f64,
    num_frames: u32,
    aspect_ratio: f64,
    pixel_width: u32,
    pixel_height: u32,
}

impl ZoomSequence {
    /// Builds a sequence whose aspect ratio follows the pixel dimensions.
    pub fn new(
        center: Complex,
        zoom_factor: f64,
        num_frames: u32,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, FractalError> {
        if pixel_width == 0 || pixel_height == 0 {
            return Err(FractalError::InvalidDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        let aspect_ratio = f64::from(pixel_width) / f64::from(pixel_height);
        Self::with_aspect_ratio(
            center,
            zoom_factor,
            num_frames,
            pixel_width,
            pixel_height,
            aspect_ratio,
        )
    }

    pub fn with_aspect_ratio(
        center: Complex,
        zoom_factor: f64,
        num_frames: u32,
        pixel_width: u32,
        pixel_height: u32,
        aspect_ratio: f64,
    ) -> Result<Self, FractalError> {
        if !zoom_factor.is_finite() || zoom_factor <= 1.0 {
            return Err(FractalError::InvalidZoomFactor { zoom_factor });
        }

        if num_frames == 0 {
            return Err(FractalError::InvalidFrameCount);
        }

        if pixel_width == 0 || pixel_height == 0 {
            return Err(FractalError::InvalidDimensions {
                width: pixel_width,
                height: pixel_height,
            });
        }

        if !aspect_ratio.is_finite() || aspect_ratio <= 0.0 {
            return Err(FractalError::InvalidAspectRatio { aspect_ratio });
        }

        Ok(Self {
            center,
            zoom_factor,
            num_frames,
            aspect_ratio,
            pixel_width,
            pixel_height,
        })
    }

    #[must_use]
    pub fn len(&self) -> u32 {
        self.num_frames
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.num_frames == 0
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn iter(&self) -> ZoomFrames {
        ZoomFrames {
            sequence: *self,
            index: 0,
            zoom: 1.0,
        }
    }

    /// The viewport of frame `index`, identical to the one `iter()` yields
    /// at that position.
    #[must_use]
    pub fn frame(&self, index: u32) -> Option<Viewport> {
        if index >= self.num_frames {
            return None;
        }

        let zoom = (0..index).fold(1.0, |zoom, _| zoom * self.zoom_factor);
        Some(self.viewport(zoom))
    }

    fn viewport(&self, zoom: f64) -> Viewport {
        Viewport {
            center: self.center,
            zoom,
            aspect_ratio: self.aspect_ratio,
            pixel_width: self.pixel_width,
            pixel_height: self.pixel_height,
        }
    }
}

impl IntoIterator for &ZoomSequence {
    type Item = Viewport;
    type IntoIter = ZoomFrames;

    fn into_iter(self) -> ZoomFrames {
        self.iter()
    }
}

/// Iterator over the viewports of a [`ZoomSequence`].
#[derive(Debug, Clone)]
pub struct ZoomFrames {
    sequence: ZoomSequence,
    index: u32,
    zoom: f64,
}

impl Iterator for ZoomFrames {
    type Item = Viewport;

    fn next(&mut self) -> Option<Viewport> {
        if self.index >= self.sequence.num_frames {
            return None;
        }

        let viewport = self.sequence.viewport(self.zoom);
        self.index += 1;
        self.zoom *= self.sequence.zoom_factor;

        Some(viewport)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.sequence.num_frames - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZoomFrames {}

impl FusedIterator for ZoomFrames {}

#[cfg(test)]
mod tests {
    use super::*;

    fn sequence(zoom_factor: f64, num_frames: u32) -> ZoomSequence {
        ZoomSequence::new(Complex::new(-0.75, 0.1), zoom_factor, num_frames, 16, 9).unwrap()
    }

    #[test]
    fn test_doubling_zoom_for_three_frames() {
        let zooms: Vec<f64> = sequence(2.0, 3).iter().map(|viewport| viewport.zoom).collect();

        assert_eq!(zooms, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn test_frames_share_everything_but_zoom() {
        for viewport in &sequence(1.1, 5) {
            assert_eq!(viewport.center, Complex::new(-0.75, 0.1));
            assert_eq!(viewport.aspect_ratio, 16.0 / 9.0);
            assert_eq!(viewport.pixel_width, 16);
            assert_eq!(viewport.pixel_height, 9);
        }
    }

    #[test]
    fn test_zoom_is_strictly_increasing() {
        let zooms: Vec<f64> = sequence(1.1, 60).iter().map(|viewport| viewport.zoom).collect();

        assert!(zooms.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_sequence_is_restartable() {
        let sequence = sequence(1.1, 20);
        let first: Vec<Viewport> = sequence.iter().collect();
        let second: Vec<Viewport> = sequence.iter().collect();

        assert_eq!(first, second);
        assert_eq!(first.len(), 20);
    }

    #[test]
    fn test_frame_matches_iteration() {
        let sequence = sequence(1.1, 30);

        for (index, viewport) in sequence.iter().enumerate() {
            assert_eq!(sequence.frame(index as u32), Some(viewport));
        }
        assert_eq!(sequence.frame(30), None);
    }

    #[test]
    fn test_exact_size() {
        let mut frames = sequence(2.0, 3).iter();

        assert_eq!(frames.len(), 3);
        frames.next();
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn test_zoom_factor_must_exceed_one() {
        for zoom_factor in [1.0, 0.9, -2.0, f64::NAN, f64::INFINITY] {
            let result = ZoomSequence::new(Complex::ZERO, zoom_factor, 3, 4, 4);

            assert!(matches!(
                result,
                Err(FractalError::InvalidZoomFactor { .. })
            ));
        }
    }

    #[test]
    fn test_needs_at_least_one_frame() {
        assert_eq!(
            ZoomSequence::new(Complex::ZERO, 2.0, 0, 4, 4),
            Err(FractalError::InvalidFrameCount)
        );
    }

    #[test]
    fn test_rejects_bad_dimensions_and_aspect() {
        assert!(matches!(
            ZoomSequence::new(Complex::ZERO, 2.0, 1, 0, 4),
            Err(FractalError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            ZoomSequence::with_aspect_ratio(Complex::ZERO, 2.0, 1, 4, 4, 0.0),
            Err(FractalError::InvalidAspectRatio { .. })
        ));
    }
}
