//! Boot Demonstration Routine.
//!
//! The CISC-16-A model does not execute instructions. Booting is a fixed script of
//! memory operations that reproduces what the OS image does on power-up:
//! 1. **Stack setup:** Re-assert `SP = 0x7FFF`.
//! 2. **Display clear:** Fill the 80x30 text grid at `0x8000` with spaces.
//! 3. **Banner:** Write `"CISC-16-A OS"` at the start of row 0.
//! 4. **Prompt:** Write `"> "` at the start of row 1.
//!
//! The routine returns a [`BootTrace`] holding every display report in write
//! order, grouped by phase, and a final context snapshot. Rendering is left to
//! the caller. The script cannot fail: all writes go through the memory space,
//! which never rejects an address.

use std::fmt;

use serde::Serialize;

use crate::common::Address;
use crate::common::constants::{RESET_SP, VRAM_BASE, VRAM_END, VRAM_SIZE};
use crate::config::Config;
use crate::core::{ContextSnapshot, MachineContext};
use crate::soc::{DisplayWrite, MemorySpace};

/// Byte used to clear display cells.
const BLANK: u8 = b' ';

/// A step of the boot script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum BootPhase {
    /// Stack pointer set to its reset value.
    StackSetup,
    /// Text grid filled with spaces.
    DisplayClear,
    /// Welcome banner written to row 0.
    Banner,
    /// Shell prompt written to row 1.
    Prompt,
}

impl BootPhase {
    /// All phases in execution order.
    pub const ALL: [Self; 4] = [
        Self::StackSetup,
        Self::DisplayClear,
        Self::Banner,
        Self::Prompt,
    ];

    /// One-based position in the script.
    pub const fn ordinal(self) -> usize {
        match self {
            Self::StackSetup => 1,
            Self::DisplayClear => 2,
            Self::Banner => 3,
            Self::Prompt => 4,
        }
    }

    /// Human-readable title of the phase.
    pub const fn title(self) -> &'static str {
        match self {
            Self::StackSetup => "Stack pointer setup",
            Self::DisplayClear => "VGA initialization",
            Self::Banner => "Welcome message",
            Self::Prompt => "Shell prompt",
        }
    }
}

impl fmt::Display for BootPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.ordinal(), self.title())
    }
}

/// Display reports produced by one phase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BootStep {
    /// The phase that ran.
    pub phase: BootPhase,
    /// Reports for the display writes of this phase, in order.
    pub writes: Vec<DisplayWrite>,
}

/// Everything observable about one run of the boot script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BootTrace {
    /// Phases in execution order.
    pub steps: Vec<BootStep>,
    /// Machine context after the last phase.
    pub snapshot: ContextSnapshot,
}

impl BootTrace {
    /// Returns the step recorded for `phase`.
    pub fn step(&self, phase: BootPhase) -> Option<&BootStep> {
        self.steps.iter().find(|s| s.phase == phase)
    }

    /// Iterates over every display report across all phases, in write order.
    pub fn writes(&self) -> impl Iterator<Item = &DisplayWrite> {
        self.steps.iter().flat_map(|s| s.writes.iter())
    }

    /// Total number of display reports.
    pub fn write_count(&self) -> usize {
        self.steps.iter().map(|s| s.writes.len()).sum()
    }
}

/// Runs the stock boot script.
pub fn run(memory: &mut MemorySpace, context: &mut MachineContext) -> BootTrace {
    run_with_config(memory, context, &Config::default())
}

/// Runs the boot script with the banner, prompt and grid taken from `config`.
///
/// `config.general.trace_writes` is applied to `memory` before the first write.
/// The cleared region, banner and prompt are clamped to the mapped display
/// window.
pub fn run_with_config(
    memory: &mut MemorySpace,
    context: &mut MachineContext,
    config: &Config,
) -> BootTrace {
    let mut steps = Vec::with_capacity(BootPhase::ALL.len());
    memory.set_trace_writes(config.general.trace_writes);

    tracing::info!(phase = %BootPhase::StackSetup, "boot");
    context.sp = RESET_SP;
    steps.push(BootStep {
        phase: BootPhase::StackSetup,
        writes: Vec::new(),
    });

    tracing::info!(phase = %BootPhase::DisplayClear, "boot");
    let cells = config.display.cells().min(VRAM_SIZE);
    let writes = memory.fill(VRAM_BASE, cells, BLANK);
    steps.push(BootStep {
        phase: BootPhase::DisplayClear,
        writes,
    });

    tracing::info!(phase = %BootPhase::Banner, "boot");
    let writes = write_text(memory, Some(VRAM_BASE), &config.boot.banner);
    steps.push(BootStep {
        phase: BootPhase::Banner,
        writes,
    });

    tracing::info!(phase = %BootPhase::Prompt, "boot");
    let prompt_start = row_start(config.display.columns, 1);
    let writes = write_text(memory, prompt_start, &config.boot.prompt);
    steps.push(BootStep {
        phase: BootPhase::Prompt,
        writes,
    });

    let snapshot = context.snapshot();
    tracing::info!(
        writes = steps.iter().map(|s| s.writes.len()).sum::<usize>(),
        "boot complete"
    );
    BootTrace { steps, snapshot }
}

/// Address of the first cell of `row` in a grid `columns` wide.
fn row_start(columns: usize, row: usize) -> Option<Address> {
    let offset = Address::try_from(columns.checked_mul(row)?).ok()?;
    VRAM_BASE.checked_add(offset)
}

/// Writes `text` from `start`, dropping whatever would run past `VRAM_END`.
fn write_text(
    memory: &mut MemorySpace,
    start: Option<Address>,
    text: &str,
) -> Vec<DisplayWrite> {
    let Some(start) = start.filter(|&a| a <= VRAM_END) else {
        return Vec::new();
    };
    let room = (VRAM_END - start) as usize + 1;
    let bytes = text.as_bytes();
    memory.write_bytes(start, &bytes[..bytes.len().min(room)])
}
