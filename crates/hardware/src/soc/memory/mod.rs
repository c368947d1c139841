//! Flat Memory Space with MMIO Dispatch.
//!
//! This module implements the 64 KiB address space of the machine. It provides:
//! 1. **Storage:** A zero-initialised byte array covering `0x0000..=0xFFFF`.
//! 2. **Dispatch:** Every in-range write is checked against the display window and
//!    forwarded to the display device once the byte has been stored.
//! 3. **Image loading:** Bulk copy of an OS image to address zero.
//!
//! Accesses outside the address space never fail: writes are dropped and reads
//! return zero.
//!
//! Every display write is logged once, at `trace` level, or at `debug` level
//! when write tracing is enabled.

use crate::common::Address;
use crate::common::constants::{MEMORY_SIZE, VRAM_BASE, VRAM_SIZE};
use crate::soc::devices::{DisplayWrite, TextDisplay};

/// The machine's flat byte-addressable memory.
#[derive(Clone, Debug)]
pub struct MemorySpace {
    /// Backing storage, always `MEMORY_SIZE` bytes.
    data: Box<[u8]>,
    /// Device receiving writes to the VRAM window.
    display: TextDisplay,
    /// Log display writes at `debug` instead of `trace`.
    trace_writes: bool,
}

impl Default for MemorySpace {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySpace {
    /// Creates a memory space with every byte set to zero.
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_SIZE].into_boxed_slice(),
            display: TextDisplay::new(),
            trace_writes: false,
        }
    }

    /// Creates a zeroed memory space with display-write tracing set to `enabled`.
    pub fn with_trace_writes(enabled: bool) -> Self {
        Self {
            trace_writes: enabled,
            ..Self::new()
        }
    }

    /// Selects the level display writes are logged at: `debug` when `enabled`,
    /// `trace` otherwise.
    pub const fn set_trace_writes(&mut self, enabled: bool) {
        self.trace_writes = enabled;
    }

    /// Returns `true` if display writes are logged at `debug` level.
    pub const fn trace_writes(&self) -> bool {
        self.trace_writes
    }

    /// Returns the size of the address space in bytes.
    pub const fn size(&self) -> usize {
        MEMORY_SIZE
    }

    /// Returns the display device attached to this memory space.
    pub const fn display(&self) -> &TextDisplay {
        &self.display
    }

    /// Reads the byte at `address`, or `0` when the address is out of range.
    #[inline]
    pub fn read(&self, address: Address) -> u8 {
        self.data.get(address as usize).copied().unwrap_or(0)
    }

    /// Stores the low byte of `value` at `address`.
    ///
    /// Writes inside the display window are forwarded to the display after the
    /// store, and the resulting report is returned. Out-of-range addresses are
    /// ignored and produce no report.
    pub fn write(&mut self, address: Address, value: u32) -> Option<DisplayWrite> {
        let slot = self.data.get_mut(address as usize)?;
        let byte = (value & 0xFF) as u8;
        *slot = byte;

        if !self.display.contains(address) {
            return None;
        }
        let report = self.display.on_write(address, byte);
        if self.trace_writes {
            tracing::debug!(address, value = byte, "{report}");
        } else {
            tracing::trace!(address, value = byte, "{report}");
        }
        Some(report)
    }

    /// Writes `bytes` to consecutive addresses starting at `start`.
    ///
    /// Returns the display reports in write order.
    pub fn write_bytes(&mut self, start: Address, bytes: &[u8]) -> Vec<DisplayWrite> {
        let mut reports = Vec::new();
        for (i, &byte) in bytes.iter().enumerate() {
            if let Some(address) = offset_address(start, i) {
                reports.extend(self.write(address, u32::from(byte)));
            }
        }
        reports
    }

    /// Writes `value` to `len` consecutive addresses starting at `start`.
    ///
    /// Returns the display reports in write order.
    pub fn fill(&mut self, start: Address, len: usize, value: u8) -> Vec<DisplayWrite> {
        let mut reports = Vec::new();
        for i in 0..len {
            if let Some(address) = offset_address(start, i) {
                reports.extend(self.write(address, u32::from(value)));
            }
        }
        reports
    }

    /// Copies an OS image to address `0x0000`.
    ///
    /// Bytes beyond the end of the address space are dropped. This is a bulk copy,
    /// not a sequence of bus writes, so the display device sees nothing.
    ///
    /// # Returns
    ///
    /// The number of bytes stored.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        let stored = image.len().min(self.data.len());
        self.data[..stored].copy_from_slice(&image[..stored]);
        if stored < image.len() {
            tracing::warn!(
                image_len = image.len(),
                stored,
                "image larger than address space, truncated"
            );
        }
        stored
    }

    /// Returns a read-only view of `len` bytes starting at `start`, clamped to
    /// the address space.
    pub fn slice(&self, start: Address, len: usize) -> &[u8] {
        let begin = (start as usize).min(self.data.len());
        let end = begin.saturating_add(len).min(self.data.len());
        &self.data[begin..end]
    }

    /// Returns the contents of the display window.
    pub fn vram(&self) -> &[u8] {
        self.slice(VRAM_BASE, VRAM_SIZE)
    }
}

/// Computes `start + i`, or `None` if it does not fit in an [`Address`].
fn offset_address(start: Address, i: usize) -> Option<Address> {
    Address::try_from(i).ok()?.checked_add(start)
}
