//! GPU-resident textures: volume, transfer function and exit-position map
//!
//! Each resource is owned by exactly one wrapper and is replaced wholesale:
//! loading a new volume or resizing the viewport creates a fresh texture and
//! drops the old one. Nothing here is updated in place.

use volcast_core::{TransferFunction, Volume};

/// Format of the offscreen ray exit-position target.
///
/// Positions are unit-cube coordinates; a float format keeps enough
/// precision for the ray segment endpoints.
pub const EXIT_MAP_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// The volume as a 3D `R32Float` texture with a trilinear sampler.
///
/// Requires `Features::FLOAT32_FILTERABLE`, which the render context
/// demands at device creation.
pub struct VolumeTexture {
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    dimensions: (u32, u32, u32),
    _texture: wgpu::Texture,
}

impl VolumeTexture {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, volume: &Volume) -> Self {
        let (width, height, depth) = volume.dimensions();
        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: depth,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Volume Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D3,
            format: wgpu::TextureFormat::R32Float,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            bytemuck::cast_slice(volume.data()),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        // Linear min/mag filtering over a 3D texture is trilinear
        // interpolation; repeat wrap handles out-of-range sample positions
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Volume Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            view,
            sampler,
            dimensions: volume.dimensions(),
            _texture: texture,
        }
    }

    pub fn dimensions(&self) -> (u32, u32, u32) {
        self.dimensions
    }
}

/// The transfer function as a 1D `Rgba8Unorm` lookup texture.
///
/// Nearest filtering and repeat wrap, mirrored on the CPU by
/// `TransferFunction::sample`.
pub struct TransferFunctionTexture {
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
    _texture: wgpu::Texture,
}

impl TransferFunctionTexture {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, tf: &TransferFunction) -> Self {
        let size = wgpu::Extent3d {
            width: tf.width(),
            height: 1,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Transfer Function Texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D1,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            texture.as_image_copy(),
            tf.rgba_data(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * tf.width()),
                rows_per_image: None,
            },
            size,
        );

        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Transfer Function Sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            view,
            sampler,
            _texture: texture,
        }
    }
}

/// Viewport-sized render target holding per-pixel ray exit positions.
///
/// Recreated at the new dimensions on every resize; overwritten by the exit
/// pass each frame and read by the raycast pass in the same submission.
pub struct ExitPositionMap {
    pub view: wgpu::TextureView,
    width: u32,
    height: u32,
    _texture: wgpu::Texture,
}

impl ExitPositionMap {
    pub fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Exit Position Map"),
            size: wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: EXIT_MAP_FORMAT,
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        });
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self {
            view,
            width,
            height,
            _texture: texture,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
