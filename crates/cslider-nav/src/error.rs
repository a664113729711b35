//! Error types for cslider-nav.

use thiserror::Error;

/// Result type for cslider-nav operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that stop a carousel from being built or re-measured.
#[derive(Debug, Error)]
pub enum Error {
    /// The track could not be measured or laid out.
    #[error(transparent)]
    Track(#[from] cslider_track::Error),

    /// The configured start slide does not exist.
    #[error("start position {position} out of range for {count} slides")]
    StartPosition { position: usize, count: usize },

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
