//! CISC-16-A machine model library.
//!
//! This crate models the externally visible hardware state of the CISC-16-A, a
//! minimal 16-bit machine, far enough to host and observe the first steps of its
//! OS boot:
//! 1. **Memory:** A flat 64 KiB address space with forgiving bounds handling.
//! 2. **MMIO:** A text display mapped at `0x8000..=0x8FFF` that reports every write.
//! 3. **Context:** General registers, stack pointer, program counter and flags.
//! 4. **Simulation:** Image loader, configuration, and the scripted boot routine.
//!
//! There is no instruction set: the boot routine is a fixed sequence of memory
//! operations.

/// Common types and constants (addresses, reset values, errors).
pub mod common;
/// Run configuration (display geometry, boot text, logging).
pub mod config;
/// Machine context (registers, flags, snapshots).
pub mod core;
/// Simulator aggregate, boot routine and loader.
pub mod sim;
/// Memory space and memory-mapped devices.
pub mod soc;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Register and flag state.
pub use crate::core::MachineContext;
/// Top-level machine; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// The flat memory space.
pub use crate::soc::MemorySpace;
