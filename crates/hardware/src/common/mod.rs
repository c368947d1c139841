//! Common types and constants shared across the machine model.
//!
//! This module provides:
//! 1. **Address Type:** The integer type used for bus addresses.
//! 2. **Constants:** Address-space size, MMIO window, and reset values.
//! 3. **Error Handling:** The error enum for image and configuration failures.

/// Machine-wide constants.
pub mod constants;

/// Error types.
pub mod error;

pub use error::SimError;

/// A bus address.
///
/// Wider than the 16-bit address bus so that callers can present addresses
/// outside `[0, 0x10000)`; the memory space ignores those instead of wrapping.
pub type Address = u32;
