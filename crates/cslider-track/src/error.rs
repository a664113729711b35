//! Error types for cslider-track.

use thiserror::Error;

/// Result type for cslider-track operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a slide track.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The host has no element to mount the carousel on.
    #[error("mount target not found")]
    MissingMount,

    /// Looping needs at least two slides.
    #[error("needs at least {min} slides, found {found}")]
    TooFewSlides { found: usize, min: usize },

    /// The frame reported a size that cannot be laid out.
    #[error("invalid frame inner size: {0}")]
    InvalidFrameSize(f64),

    /// The host reported a different number of sizes than slides.
    #[error("host reported {reported} slide sizes for {expected} slides")]
    SizeMismatch { expected: usize, reported: usize },
}
