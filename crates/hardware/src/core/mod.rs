//! CPU-side state.
//!
//! The CISC-16-A model has no instruction pipeline; the core is reduced to the
//! register and flag context that a snapshot reports.

/// Registers, flags, reset values and snapshots.
pub mod context;

pub use context::{ContextSnapshot, Flags, MachineContext, Register};
