//! 1D transfer function: intensity to color lookup
//!
//! The table is decoded from the first row of an RGB image (any size the
//! `image` crate can read) or built from raw RGB bytes. On the GPU it becomes
//! a 1D `Rgba8Unorm` texture sampled with nearest filtering and repeat wrap;
//! [`TransferFunction::sample`] mirrors that sampler on the CPU so tests can
//! check lookups without a device.

use std::path::Path;

use crate::error::{CoreError, Result};

/// A 1D RGBA8 lookup table mapping normalized intensity to color.
#[derive(Debug, Clone)]
pub struct TransferFunction {
    width: u32,
    rgba: Vec<u8>,
}

impl TransferFunction {
    /// Width of the generated default preset.
    pub const DEFAULT_WIDTH: u32 = 256;

    /// Decode a transfer function from the first row of an image file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path)?.to_rgb8();
        if image.width() == 0 || image.height() == 0 {
            return Err(CoreError::EmptyTransferFunction);
        }
        let row: Vec<u8> = (0..image.width())
            .flat_map(|x| image.get_pixel(x, 0).0)
            .collect();
        Self::from_rgb_pixels(image.width(), &row)
    }

    /// Build a transfer function from raw RGB bytes, 3 per entry.
    pub fn from_rgb_pixels(width: u32, rgb: &[u8]) -> Result<Self> {
        if width == 0 {
            return Err(CoreError::EmptyTransferFunction);
        }
        let expected = width as usize * 3;
        if rgb.len() != expected {
            return Err(CoreError::TransferFunctionSizeMismatch {
                expected,
                actual: rgb.len(),
            });
        }
        let mut rgba = Vec::with_capacity(width as usize * 4);
        for pixel in rgb.chunks_exact(3) {
            rgba.extend_from_slice(pixel);
            rgba.push(255);
        }
        Ok(Self { width, rgba })
    }

    /// The bundled default preset: a flame-style ramp.
    ///
    /// Intensity 0 maps to black, then red, orange and white. Loaded at
    /// startup so the viewer never runs without an active transfer function.
    pub fn flame_preset() -> Self {
        let width = Self::DEFAULT_WIDTH;
        let mut rgba = Vec::with_capacity(width as usize * 4);
        for i in 0..width {
            let t = i as f32 / (width - 1) as f32;
            let r = (t * 3.0).clamp(0.0, 1.0);
            let g = (t * 3.0 - 1.0).clamp(0.0, 1.0);
            let b = (t * 3.0 - 2.0).clamp(0.0, 1.0);
            rgba.push((r * 255.0) as u8);
            rgba.push((g * 255.0) as u8);
            rgba.push((b * 255.0) as u8);
            rgba.push(255);
        }
        Self { width, rgba }
    }

    /// Number of lookup entries.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// RGBA8 pixel data, 4 bytes per entry.
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba
    }

    /// Look up the color for a normalized intensity.
    ///
    /// Matches the GPU sampler: nearest filtering, repeat wrap for inputs
    /// outside [0, 1).
    pub fn sample(&self, t: f32) -> [u8; 3] {
        let index = (t * self.width as f32).floor() as i64;
        let index = index.rem_euclid(self.width as i64) as usize;
        let offset = index * 4;
        [self.rgba[offset], self.rgba[offset + 1], self.rgba[offset + 2]]
    }
}

impl Default for TransferFunction {
    fn default() -> Self {
        Self::flame_preset()
    }
}
