//! Memory-Mapped Text Display (VGA).
//!
//! The display owns no storage: its character cells live in the memory space at
//! `0x8000..=0x8FFF`, and the cell position of a write is implied by its offset
//! from `0x8000`. The device itself is a pure transformation that turns a
//! forwarded byte into a [`DisplayWrite`] report for a renderer to consume.
//!
//! # Character mapping
//!
//! * `0x20..=0x7E`: printable ASCII, reported as itself.
//! * anything else: reported as `.`.

use std::fmt;

use serde::Serialize;

use crate::common::Address;
use crate::common::constants::{
    NON_PRINTABLE_CHAR, PRINTABLE_FIRST, PRINTABLE_LAST, VRAM_BASE, VRAM_SIZE,
};

/// Maps a byte to the character the display shows for it.
pub const fn to_display_char(value: u8) -> char {
    if value >= PRINTABLE_FIRST && value <= PRINTABLE_LAST {
        value as char
    } else {
        NON_PRINTABLE_CHAR
    }
}

/// Report produced for every write that lands in the display window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DisplayWrite {
    /// Bus address that was written.
    pub address: Address,
    /// Character shown for `value`.
    pub character: char,
    /// Byte value as stored in memory.
    pub value: u8,
}

impl DisplayWrite {
    /// Cell offset of this write from the start of the display window.
    pub const fn offset(&self) -> usize {
        self.address.saturating_sub(VRAM_BASE) as usize
    }
}

impl fmt::Display for DisplayWrite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "VGA[{:04X}]: {} ({:02X})",
            self.address, self.character, self.value
        )
    }
}

/// The text display device mapped at `0x8000..=0x8FFF`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextDisplay;

impl TextDisplay {
    /// Creates the display device.
    pub const fn new() -> Self {
        Self
    }

    /// Returns (base_address, size_in_bytes) of the mapped window.
    pub const fn address_range(&self) -> (Address, usize) {
        (VRAM_BASE, VRAM_SIZE)
    }

    /// Returns `true` if `address` falls inside the mapped window.
    #[inline]
    pub const fn contains(&self, address: Address) -> bool {
        let (base, size) = self.address_range();
        address >= base && ((address - base) as usize) < size
    }

    /// Converts a forwarded write into a report.
    ///
    /// Called by the memory space after the byte has been stored, and only for
    /// addresses inside the window.
    pub const fn on_write(&self, address: Address, value: u8) -> DisplayWrite {
        DisplayWrite {
            address,
            character: to_display_char(value),
            value,
        }
    }

    /// Renders a `columns` x `rows` window of display memory as text.
    ///
    /// `vram` is the byte content of the display window, starting at `0x8000`.
    /// Rows are separated by `'\n'`. Cells past the end of `vram` are not
    /// rendered, so a grid larger than the window is cut short rather than padded.
    pub fn screen_text(&self, vram: &[u8], columns: usize, rows: usize) -> String {
        if columns == 0 {
            return String::new();
        }
        let cells = columns.saturating_mul(rows).min(vram.len());
        vram[..cells]
            .chunks(columns)
            .map(|row| row.iter().map(|&b| to_display_char(b)).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
