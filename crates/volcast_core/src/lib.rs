//! Core types for the volcast volume renderer
//!
//! This crate holds the CPU-side data model shared by the render and input
//! crates:
//!
//! - [`Volume`] - a 3D scalar field with validated dimensions
//! - [`TransferFunction`] - a 1D intensity-to-color lookup table
//! - [`RenderParams`] - sample count, sample range and compositing technique
//! - [`composite_ray`] - CPU mirror of the GPU compositing loop
//! - [`CoreError`] - error type for loading and validation failures

mod compositing;
mod error;
mod params;
mod transfer_function;
mod volume;

pub use compositing::{composite_ray, ALPHA_SATURATION};
pub use error::{CoreError, Result};
pub use params::{RenderParams, Technique, INTERACTION_SAMPLE_COUNT};
pub use transfer_function::TransferFunction;
pub use volume::Volume;
