//! System Components.
//!
//! This module organizes the bus-facing parts of the machine: the flat memory
//! space and the memory-mapped devices it dispatches to.

/// Memory-mapped I/O device implementations.
pub mod devices;

/// Flat memory space and MMIO dispatch.
pub mod memory;

pub use devices::{DisplayWrite, TextDisplay};
pub use memory::MemorySpace;
