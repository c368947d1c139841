//! Simulation driver, boot script and image loading.
//!
//! Provides the top-level [`Simulator`] aggregate, the scripted boot routine that
//! stands in for program execution, and the loader that places an OS image in
//! memory.

/// Scripted boot routine and its trace.
pub mod boot;

/// OS image loading from disk.
pub mod loader;

/// Memory + context aggregate.
pub mod simulator;

pub use boot::{BootPhase, BootStep, BootTrace};
pub use loader::LoadedImage;
pub use simulator::Simulator;
