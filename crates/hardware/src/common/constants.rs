//! Global Machine Constants.
//!
//! This module defines the fixed hardware parameters of the CISC-16-A. It includes:
//! 1. **Memory Constants:** Size of the flat address space.
//! 2. **MMIO Constants:** Bounds of the memory-mapped display window.
//! 3. **Reset Constants:** Power-on values of the stack pointer and program counter.
//! 4. **Display Constants:** Text-mode geometry used by the boot routine.

/// Size of the flat address space in bytes (64 KiB).
pub const MEMORY_SIZE: usize = 0x1_0000;

/// First address of the memory-mapped display window (VRAM).
pub const VRAM_BASE: u32 = 0x8000;

/// Last address (inclusive) of the memory-mapped display window.
pub const VRAM_END: u32 = 0x8FFF;

/// Number of bytes covered by the display window.
pub const VRAM_SIZE: usize = (VRAM_END - VRAM_BASE + 1) as usize;

/// Stack pointer value after reset.
pub const RESET_SP: u16 = 0x7FFF;

/// Program counter value after reset; the conventional OS entry point.
pub const RESET_PC: u16 = 0xFE00;

/// Text-mode columns.
pub const DISPLAY_COLUMNS: usize = 80;

/// Text-mode rows.
pub const DISPLAY_ROWS: usize = 30;

/// Character substituted for bytes outside printable ASCII.
pub const NON_PRINTABLE_CHAR: char = '.';

/// First printable ASCII code (space).
pub const PRINTABLE_FIRST: u8 = 0x20;

/// Last printable ASCII code (`~`).
pub const PRINTABLE_LAST: u8 = 0x7E;
