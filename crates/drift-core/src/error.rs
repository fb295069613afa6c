//! Error types for drift

use thiserror::Error;

/// The main error type for drift operations
#[derive(Debug, Error)]
pub enum DriftError {
    #[error("Pixel storage too small: need {needed} bytes, got {len}")]
    StorageTooSmall { needed: usize, len: usize },

    #[error("Row pitch too small: pitch {pitch} < width {width} * 4 bytes")]
    PitchTooSmall { pitch: usize, width: u32 },

    #[error("Framebuffer dimensions must be non-zero: {width}x{height}")]
    EmptyFrameBuffer { width: u32, height: u32 },
}

/// Result type alias for drift operations
pub type Result<T> = std::result::Result<T, DriftError>;
