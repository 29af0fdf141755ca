//! Hard errors surfaced at the crate boundary.
//!
//! Only malformed input (bad geometry, non-binary samples) and I/O failures
//! are errors. Weak evidence for staff lines is reported as
//! [`LowConfidence`](crate::types::LowConfidence) instead.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffError {
    #[error("invalid image geometry {width}x{height}: both dimensions must be positive")]
    InvalidGeometry { width: usize, height: usize },

    #[error("pixel buffer holds {actual} samples, expected {expected}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("sample {value} at index {index} is neither foreground nor background")]
    InvalidSample { index: usize, value: i32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StaffError>;
