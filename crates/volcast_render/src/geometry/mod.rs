//! Bounding geometry for the volume
//!
//! The volume occupies the unit cube; both render passes rasterize the same
//! cube mesh, differing only in which faces the rasterizer culls.

mod cube;

pub use cube::{CubeBuffers, CUBE_INDEX_COUNT, CUBE_INDICES, CUBE_VERTEX_COUNT, CUBE_VERTICES};
