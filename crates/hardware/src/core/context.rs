//! Machine Context.
//!
//! This module holds the architectural state of the CISC-16-A. It provides:
//! 1. **Registers:** Six independent 16-bit general registers, the stack pointer
//!    and the program counter.
//! 2. **Flags:** The carry and zero status flags.
//! 3. **Reset:** Power-on values (`SP = 0x7FFF`, `PC = 0xFE00`, everything else zero).
//! 4. **Observability:** An immutable [`ContextSnapshot`] for reporting.
//!
//! There is no aliasing between registers: writing one never changes another.

use std::fmt;

use serde::Serialize;

use crate::common::constants::{RESET_PC, RESET_SP};

/// Names of the 16-bit registers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Register {
    /// Accumulator.
    Ax,
    /// Base register.
    Bx,
    /// Count register.
    Cx,
    /// Data register.
    Dx,
    /// Source index.
    Si,
    /// Destination index.
    Di,
    /// Stack pointer.
    Sp,
    /// Program counter.
    Pc,
}

impl Register {
    /// All registers, in snapshot order.
    pub const ALL: [Self; 8] = [
        Self::Ax,
        Self::Bx,
        Self::Cx,
        Self::Dx,
        Self::Si,
        Self::Di,
        Self::Sp,
        Self::Pc,
    ];

    /// Returns the upper-case mnemonic (e.g. `"AX"`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ax => "AX",
            Self::Bx => "BX",
            Self::Cx => "CX",
            Self::Dx => "DX",
            Self::Si => "SI",
            Self::Di => "DI",
            Self::Sp => "SP",
            Self::Pc => "PC",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Status flags.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    /// Carry flag (CF).
    pub carry: bool,
    /// Zero flag (ZF).
    pub zero: bool,
}

/// Register and flag state of the machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MachineContext {
    /// Accumulator.
    pub ax: u16,
    /// Base register.
    pub bx: u16,
    /// Count register.
    pub cx: u16,
    /// Data register.
    pub dx: u16,
    /// Source index.
    pub si: u16,
    /// Destination index.
    pub di: u16,
    /// Stack pointer.
    pub sp: u16,
    /// Program counter.
    pub pc: u16,
    /// Status flags.
    pub flags: Flags,
}

impl Default for MachineContext {
    fn default() -> Self {
        Self::new()
    }
}

impl MachineContext {
    /// Creates a context holding the reset values.
    pub const fn new() -> Self {
        Self {
            ax: 0,
            bx: 0,
            cx: 0,
            dx: 0,
            si: 0,
            di: 0,
            sp: RESET_SP,
            pc: RESET_PC,
            flags: Flags {
                carry: false,
                zero: false,
            },
        }
    }

    /// Restores every register and flag to its reset value.
    pub fn reset(&mut self) {
        *self = Self::new();
        tracing::debug!(sp = self.sp, pc = self.pc, "machine context reset");
    }

    /// Reads a register by name.
    pub const fn read(&self, reg: Register) -> u16 {
        match reg {
            Register::Ax => self.ax,
            Register::Bx => self.bx,
            Register::Cx => self.cx,
            Register::Dx => self.dx,
            Register::Si => self.si,
            Register::Di => self.di,
            Register::Sp => self.sp,
            Register::Pc => self.pc,
        }
    }

    /// Writes a register by name.
    pub const fn write(&mut self, reg: Register, val: u16) {
        match reg {
            Register::Ax => self.ax = val,
            Register::Bx => self.bx = val,
            Register::Cx => self.cx = val,
            Register::Dx => self.dx = val,
            Register::Si => self.si = val,
            Register::Di => self.di = val,
            Register::Sp => self.sp = val,
            Register::Pc => self.pc = val,
        }
    }

    /// Captures the current state.
    pub const fn snapshot(&self) -> ContextSnapshot {
        ContextSnapshot {
            ax: self.ax,
            bx: self.bx,
            cx: self.cx,
            dx: self.dx,
            si: self.si,
            di: self.di,
            stack_pointer: self.sp,
            program_counter: self.pc,
            carry: self.flags.carry,
            zero: self.flags.zero,
        }
    }
}

/// Point-in-time copy of the machine context, for reporting.
///
/// Renders with [`fmt::Display`] as the three-line CPU state dump:
///
/// ```text
/// === CPU State ===
/// AX:0000 BX:0000 CX:0000 DX:0000
/// SI:0000 DI:0000 SP:7FFF PC:FE00
/// Flags: CF=false ZF=false
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ContextSnapshot {
    /// Accumulator.
    pub ax: u16,
    /// Base register.
    pub bx: u16,
    /// Count register.
    pub cx: u16,
    /// Data register.
    pub dx: u16,
    /// Source index.
    pub si: u16,
    /// Destination index.
    pub di: u16,
    /// Stack pointer.
    pub stack_pointer: u16,
    /// Program counter.
    pub program_counter: u16,
    /// Carry flag.
    pub carry: bool,
    /// Zero flag.
    pub zero: bool,
}

impl fmt::Display for ContextSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== CPU State ===")?;
        writeln!(
            f,
            "AX:{:04X} BX:{:04X} CX:{:04X} DX:{:04X}",
            self.ax, self.bx, self.cx, self.dx
        )?;
        writeln!(
            f,
            "SI:{:04X} DI:{:04X} SP:{:04X} PC:{:04X}",
            self.si, self.di, self.stack_pointer, self.program_counter
        )?;
        write!(f, "Flags: CF={} ZF={}", self.carry, self.zero)
    }
}
