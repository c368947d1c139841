//! OS Image Loader.
//!
//! Reads a raw OS image from disk and copies it into memory at address `0x0000`.
//! Images have no header or magic number; the whole file is copied verbatim and
//! anything past 64 KiB is dropped by the memory space.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::common::SimError;
use crate::soc::MemorySpace;

/// Outcome of loading an image file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LoadedImage {
    /// Length of the image file in bytes.
    pub image_len: usize,
    /// Bytes actually stored, capped at 64 KiB.
    pub stored: usize,
}

impl LoadedImage {
    /// Returns `true` if part of the image did not fit in memory.
    pub const fn is_truncated(&self) -> bool {
        self.stored < self.image_len
    }
}

/// Reads an image file into a byte vector.
///
/// # Errors
///
/// Returns [`SimError::ImageUnavailable`] if the file cannot be opened or read.
pub fn read_image(path: impl AsRef<Path>) -> Result<Vec<u8>, SimError> {
    let path = path.as_ref();
    fs::read(path).map_err(|source| SimError::ImageUnavailable {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads an image file into `memory` starting at address zero.
///
/// Memory is not touched unless the whole file was read successfully.
///
/// # Returns
///
/// The file length and the number of bytes stored (the length capped at 64 KiB).
///
/// # Errors
///
/// Returns [`SimError::ImageUnavailable`] if the file cannot be opened or read.
pub fn load_image_file(
    memory: &mut MemorySpace,
    path: impl AsRef<Path>,
) -> Result<LoadedImage, SimError> {
    let path = path.as_ref();
    let image = read_image(path)?;
    let loaded = LoadedImage {
        image_len: image.len(),
        stored: memory.load_image(&image),
    };
    tracing::info!(
        path = %path.display(),
        stored = loaded.stored,
        "OS loaded: {} bytes",
        loaded.image_len
    );
    Ok(loaded)
}
