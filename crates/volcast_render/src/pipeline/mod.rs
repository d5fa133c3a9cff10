//! The two-pass raycasting pipeline
//!
//! Pass 1 ([`ExitPassPipeline`]) rasterizes cube back faces into the
//! exit-position map. Pass 2 ([`RaycastPipeline`]) rasterizes cube front
//! faces, marching each fragment's ray from the interpolated entry position
//! to the exit position read back from pass 1.

pub mod exit_pass;
pub mod raycast_pass;
pub mod types;

pub use exit_pass::ExitPassPipeline;
pub use raycast_pass::RaycastPipeline;
pub use types::{cube_vertex_layout, ExitPassUniforms, RaycastUniforms};
