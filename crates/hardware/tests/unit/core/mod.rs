//! Unit tests for the machine context.

/// Reset values, register access, independence, and snapshot rendering.
pub mod context;
