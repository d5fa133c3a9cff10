//! Pointer input handling for volcast
//!
//! This crate turns pointer-drag events into camera mutations and manages
//! the interactive quality drop while a drag is active.

mod drag_controller;

pub use drag_controller::{DragController, ViewControl};
