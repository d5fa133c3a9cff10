//! volcast - interactive volume raycasting viewer
//!
//! The binary lives in `main.rs`; this library target exposes the
//! application configuration for integration tests.

pub mod config;
