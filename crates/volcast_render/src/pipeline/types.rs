//! GPU-compatible uniform types for the two render passes
//!
//! These types match the WGSL struct layouts exactly and derive Pod and
//! Zeroable for safe buffer writes.

use bytemuck::{Pod, Zeroable};
use volcast_core::RenderParams;

use crate::transform::{identity_matrix, Mat4};

/// Uniforms for the exit-position pass: just the MVP transform.
/// Layout: 64 bytes (must match exit_map.wgsl).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ExitPassUniforms {
    pub mvp: Mat4,
}

impl Default for ExitPassUniforms {
    fn default() -> Self {
        Self {
            mvp: identity_matrix(),
        }
    }
}

/// Uniforms for the raycast pass.
/// Layout: 80 bytes (must match raycast.wgsl RaycastUniforms).
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct RaycastUniforms {
    /// Model-view-projection transform (64 bytes)
    pub mvp: Mat4,
    /// Samples marched along each ray
    pub num_samples: u32,
    /// Compositing technique index (see `Technique::shader_index`)
    pub technique: u32,
    /// Normalized segment parameter where marching starts
    pub sample_range_start: f32,
    /// Normalized segment parameter where marching ends
    pub sample_range_end: f32,
}

impl RaycastUniforms {
    pub fn new(mvp: Mat4, params: &RenderParams) -> Self {
        Self {
            mvp,
            num_samples: params.num_samples(),
            technique: params.technique().shader_index(),
            sample_range_start: params.sample_range_start(),
            sample_range_end: params.sample_range_end(),
        }
    }
}

impl Default for RaycastUniforms {
    fn default() -> Self {
        Self::new(identity_matrix(), &RenderParams::default())
    }
}

/// Vertex buffer layout for the cube's position-only vertices.
pub fn cube_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position: vec3<f32>
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;
    use volcast_core::Technique;

    #[test]
    fn test_exit_pass_uniforms_size() {
        // One 4x4 matrix = 64 bytes
        assert_eq!(size_of::<ExitPassUniforms>(), 64);
    }

    #[test]
    fn test_raycast_uniforms_size() {
        // Matrix + two u32 + two f32 = 80 bytes
        assert_eq!(size_of::<RaycastUniforms>(), 80);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(std::mem::align_of::<ExitPassUniforms>(), 4);
        assert_eq!(std::mem::align_of::<RaycastUniforms>(), 4);
    }

    #[test]
    fn test_uniforms_from_params() {
        let mut params = RenderParams::default();
        params.set_num_samples(42);
        params.set_sample_range_start(0.25);
        params.set_sample_range_end(0.75);
        params.set_technique(Technique::Average);

        let uniforms = RaycastUniforms::new(identity_matrix(), &params);
        assert_eq!(uniforms.num_samples, 42);
        assert_eq!(uniforms.technique, 2);
        assert_eq!(uniforms.sample_range_start, 0.25);
        assert_eq!(uniforms.sample_range_end, 0.75);
    }

    #[test]
    fn test_cube_vertex_layout_stride() {
        let layout = cube_vertex_layout();
        assert_eq!(layout.array_stride, 12);
    }
}
