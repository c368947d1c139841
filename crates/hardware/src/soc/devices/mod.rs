//! Memory-Mapped IO Devices.
//!
//! The CISC-16-A exposes a single device on its bus: a text display whose
//! character cells are mapped into the upper half of the address space.

/// Text display mapped at `0x8000..=0x8FFF`.
pub mod display;

pub use display::{DisplayWrite, TextDisplay, to_display_char};
