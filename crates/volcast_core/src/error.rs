//! Error types for volcast core data loading.

use thiserror::Error;

/// Errors produced while building volumes and transfer functions.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Volume dimensions must all be positive.
    #[error("volume dimensions must be positive, got {0}x{1}x{2}")]
    InvalidVolumeDimensions(u32, u32, u32),

    /// Voxel data length does not match the declared dimensions.
    #[error("volume data size mismatch: expected {expected} voxels, got {actual}")]
    VolumeSizeMismatch { expected: usize, actual: usize },

    /// Transfer function must have at least one entry.
    #[error("transfer function is empty")]
    EmptyTransferFunction,

    /// Raw transfer function pixel data has the wrong length.
    #[error("transfer function data size mismatch: expected {expected} bytes, got {actual}")]
    TransferFunctionSizeMismatch { expected: usize, actual: usize },

    /// Decoding a transfer function image failed.
    #[error("failed to decode transfer function image: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error while reading a dataset from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for volcast core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
