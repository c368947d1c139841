//! Simulator error definitions.
//!
//! Memory, display and register accesses are total and never fail; out-of-range
//! addresses are absorbed by the memory space itself. The only failures left are
//! at the edges of the system:
//! 1. **Image loading:** The OS image file cannot be opened or read.
//! 2. **Configuration:** The configuration file cannot be read or does not parse.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the loader and configuration layers.
#[derive(Debug, thiserror::Error)]
pub enum SimError {
    /// The OS image could not be obtained from its source.
    ///
    /// Memory is left untouched when this is returned.
    #[error("could not read image '{}': {source}", path.display())]
    ImageUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    ConfigUnavailable {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}

impl SimError {
    /// Returns `true` if this error came from the image source.
    pub const fn is_image_error(&self) -> bool {
        matches!(self, Self::ImageUnavailable { .. })
    }
}
