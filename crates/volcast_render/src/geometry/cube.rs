//! Unit-cube mesh whose vertex positions double as volume coordinates
//!
//! Vertex positions lie in [0, 1]^3, so the interpolated position of a
//! rasterized fragment is directly a texture coordinate into the volume.
//! The exit pass culls front faces to rasterize ray exit positions; the
//! raycast pass culls back faces to rasterize ray entry positions.

use wgpu::util::DeviceExt;

pub const CUBE_VERTEX_COUNT: usize = 8;
pub const CUBE_INDEX_COUNT: usize = 36;

/// Corners of the unit cube; vertex i is ((i >> 0) & 1, (i >> 1) & 1, (i >> 2) & 1).
pub const CUBE_VERTICES: [[f32; 3]; CUBE_VERTEX_COUNT] = [
    [0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [1.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 0.0, 1.0],
    [0.0, 1.0, 1.0],
    [1.0, 1.0, 1.0],
];

/// 12 triangles, counter-clockwise when viewed from outside the cube.
pub const CUBE_INDICES: [u32; CUBE_INDEX_COUNT] = [
    4, 5, 7, 4, 7, 6, // +Z
    0, 2, 3, 0, 3, 1, // -Z
    1, 3, 7, 1, 7, 5, // +X
    0, 4, 6, 0, 6, 2, // -X
    2, 6, 7, 2, 7, 3, // +Y
    0, 1, 5, 0, 5, 4, // -Y
];

/// GPU vertex and index buffers for the bounding cube.
///
/// Created once at startup and shared by both passes for the process
/// lifetime.
pub struct CubeBuffers {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
}

impl CubeBuffers {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertex Buffer"),
            contents: bytemuck::cast_slice(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Index Buffer"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        Self {
            vertex_buffer,
            index_buffer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    #[test]
    fn test_indices_in_bounds() {
        assert!(CUBE_INDICES
            .iter()
            .all(|&i| (i as usize) < CUBE_VERTEX_COUNT));
    }

    #[test]
    fn test_every_vertex_referenced() {
        for v in 0..CUBE_VERTEX_COUNT as u32 {
            assert!(CUBE_INDICES.contains(&v), "vertex {} unused", v);
        }
    }

    #[test]
    fn test_winding_faces_outward() {
        // Each triangle's normal must point away from the cube center, so
        // that CCW front faces are the outside of the cube
        let center = [0.5, 0.5, 0.5];
        for triangle in CUBE_INDICES.chunks_exact(3) {
            let a = CUBE_VERTICES[triangle[0] as usize];
            let b = CUBE_VERTICES[triangle[1] as usize];
            let c = CUBE_VERTICES[triangle[2] as usize];
            let normal = cross(sub(b, a), sub(c, b));
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            let outward = sub(centroid, center);
            let d: f32 = normal
                .iter()
                .zip(outward.iter())
                .map(|(n, o)| n * o)
                .sum();
            assert!(d > 0.0, "triangle {:?} winds inward", triangle);
        }
    }

    #[test]
    fn test_vertices_span_unit_cube() {
        for axis in 0..3 {
            assert!(CUBE_VERTICES.iter().any(|v| v[axis] == 0.0));
            assert!(CUBE_VERTICES.iter().any(|v| v[axis] == 1.0));
        }
        assert!(CUBE_VERTICES
            .iter()
            .flatten()
            .all(|&c| c == 0.0 || c == 1.0));
    }
}
