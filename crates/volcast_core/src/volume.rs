//! 3D scalar volume storage
//!
//! A [`Volume`] is a dense grid of single-channel float intensities in
//! [0, 1]. It is immutable once built and is replaced wholesale (together
//! with its GPU texture) when a new dataset loads.

use crate::error::{CoreError, Result};

/// A 3D scalar field with validated dimensions.
///
/// Voxels are stored as a flat array indexed `x + width * (y + height * z)`,
/// the layout expected by `wgpu::Queue::write_texture` for a 3D texture.
#[derive(Debug, Clone)]
pub struct Volume {
    width: u32,
    height: u32,
    depth: u32,
    data: Vec<f32>,
}

impl Volume {
    /// Create a volume from dimensions and a flat intensity array.
    ///
    /// Fails if any dimension is zero or the data length does not equal
    /// `width * height * depth`.
    pub fn new(width: u32, height: u32, depth: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 || depth == 0 {
            return Err(CoreError::InvalidVolumeDimensions(width, height, depth));
        }
        let expected = (width as usize) * (height as usize) * (depth as usize);
        if data.len() != expected {
            return Err(CoreError::VolumeSizeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            depth,
            data,
        })
    }

    /// Create a volume from raw 8-bit voxel data, normalized to [0, 1].
    ///
    /// This is the layout of the raw scan datasets the viewer loads from
    /// disk: one byte per voxel, x fastest.
    pub fn from_u8(width: u32, height: u32, depth: u32, data: &[u8]) -> Result<Self> {
        let normalized = data.iter().map(|&v| v as f32 / 255.0).collect();
        Self::new(width, height, depth, normalized)
    }

    /// Procedural demo dataset: a soft spherical shell centered in the cube.
    ///
    /// Lets the viewer start without any dataset on disk.
    pub fn synthetic_shell(size: u32) -> Self {
        let size = size.max(2);
        let n = size as usize;
        let mut data = Vec::with_capacity(n * n * n);
        let center = (size as f32 - 1.0) / 2.0;
        let shell_radius = center * 0.7;
        let thickness = center * 0.25;
        for z in 0..n {
            for y in 0..n {
                for x in 0..n {
                    let dx = x as f32 - center;
                    let dy = y as f32 - center;
                    let dz = z as f32 - center;
                    let r = (dx * dx + dy * dy + dz * dz).sqrt();
                    let d = (r - shell_radius).abs();
                    let intensity = (1.0 - d / thickness).clamp(0.0, 1.0);
                    data.push(intensity);
                }
            }
        }
        // Dimensions and length are consistent by construction
        Self {
            width: size,
            height: size,
            depth: size,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Dimensions as (width, height, depth).
    pub fn dimensions(&self) -> (u32, u32, u32) {
        (self.width, self.height, self.depth)
    }

    /// Number of voxels.
    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// The flat intensity array, x fastest.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Intensity at integer voxel coordinates.
    ///
    /// Coordinates must be within the volume dimensions.
    pub fn voxel(&self, x: u32, y: u32, z: u32) -> f32 {
        let index = x as usize
            + (self.width as usize) * (y as usize + (self.height as usize) * z as usize);
        self.data[index]
    }
}
