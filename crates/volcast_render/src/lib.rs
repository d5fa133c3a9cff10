//! Volume raycasting renderer
//!
//! This crate provides the wgpu-based two-pass raycasting pipeline:
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::OrbitCamera`] - rotation/pan/zoom state and per-frame matrix derivation
//! - [`pipeline::ExitPassPipeline`] - renders cube back faces into the ray exit-position map
//! - [`pipeline::RaycastPipeline`] - marches rays from entry to exit and composites samples
//! - [`textures`] - GPU-resident volume, transfer function and exit-map resources
//! - [`geometry`] - the unit-cube bounding geometry both passes rasterize
//!
//! Frame protocol: the exit pass is recorded into the command encoder before
//! the raycast pass, so submission order provides the write-before-read
//! dependency on the exit-position map.

pub mod camera;
pub mod context;
pub mod geometry;
pub mod pipeline;
pub mod textures;
pub mod transform;

// Re-export core types for convenience
pub use volcast_core::{RenderParams, Technique, TransferFunction, Volume};

pub use camera::OrbitCamera;
pub use context::RenderContext;
