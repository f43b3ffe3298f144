//! Frame sampler: 3x3 grid sampling of one face image
//!
//! Partitions the buffer into nine equal cells and samples the pixel at each
//! cell center in row-major order. Output is always exactly 9 labels and is
//! deterministic for a fixed buffer.

use crate::types::{AcquisitionError, FaceString, Facelet, Rgb};
use crate::{FACELETS_PER_FACE, GRID_DIM};

use super::ColorClassifier;

/// Rectangular RGB pixel source for one cube face.
///
/// Implementors guarantee `get_pixel` is defined for
/// `0 <= x < width, 0 <= y < height`.
pub trait PixelBuffer {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn get_pixel(&self, x: u32, y: u32) -> Rgb;
}

/// Owned row-major pixel grid, the wire form used by the HTTP API and tests
#[derive(Debug, Clone)]
pub struct GridBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl GridBuffer {
    /// Build from row-major pixels; None if the pixel count does not match
    /// the dimensions
    pub fn new(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if pixels.len() != (width as usize) * (height as usize) {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Buffer filled with a single color
    pub fn solid(width: u32, height: u32, color: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width as usize) * (height as usize)],
        }
    }
}

impl PixelBuffer for GridBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }
}

impl PixelBuffer for image::RgbImage {
    fn width(&self) -> u32 {
        image::RgbImage::width(self)
    }

    fn height(&self) -> u32 {
        image::RgbImage::height(self)
    }

    fn get_pixel(&self, x: u32, y: u32) -> Rgb {
        let p = image::RgbImage::get_pixel(self, x, y);
        Rgb::new(p[0], p[1], p[2])
    }
}

/// Frame sampler: grid sampling plus per-sample classification
#[derive(Debug, Clone, Default)]
pub struct FrameSampler {
    classifier: ColorClassifier,
}

impl FrameSampler {
    /// Create a sampler over the given classifier
    pub fn new(classifier: ColorClassifier) -> Self {
        Self { classifier }
    }

    /// Sample one face: nine cell-center pixels in row-major order, each
    /// classified to a label.
    ///
    /// A zero-width or zero-height buffer is a caller error, rejected before
    /// any geometry is computed.
    pub fn sample_face(&self, buffer: &impl PixelBuffer) -> Result<FaceString, AcquisitionError> {
        let width = buffer.width();
        let height = buffer.height();
        if width == 0 || height == 0 {
            return Err(AcquisitionError::ZeroArea { width, height });
        }

        let cell_w = width as f64 / GRID_DIM as f64;
        let cell_h = height as f64 / GRID_DIM as f64;

        let mut labels = [Facelet::U; FACELETS_PER_FACE];
        for row in 0..GRID_DIM {
            for col in 0..GRID_DIM {
                let x = (col as f64 * cell_w + cell_w / 2.0).floor() as u32;
                let y = (row as f64 * cell_h + cell_h / 2.0).floor() as u32;
                let sample = buffer.get_pixel(x, y);
                labels[(row * GRID_DIM + col) as usize] = self.classifier.classify(sample);
            }
        }

        Ok(FaceString::new(labels))
    }
}

// =============================================================================
// TESTS
// =============================================================================
