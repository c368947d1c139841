//! Simulator: owns the memory space and machine context side-by-side.
//!
//! There is no global machine. Each `Simulator` is an explicitly constructed
//! aggregate, and the boot routine borrows its parts for the duration of a run.

use std::path::Path;

use crate::common::SimError;
use crate::config::Config;
use crate::core::MachineContext;
use crate::sim::boot::{self, BootTrace};
use crate::sim::loader::{self, LoadedImage};
use crate::soc::MemorySpace;

/// Top-level machine: memory space + machine context + run configuration.
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    /// Flat memory with the display window.
    pub memory: MemorySpace,
    /// Register and flag state.
    pub context: MachineContext,
    config: Config,
}

impl Simulator {
    /// Creates a machine in its reset state.
    pub fn new(config: Config) -> Self {
        Self {
            memory: MemorySpace::with_trace_writes(config.general.trace_writes),
            context: MachineContext::new(),
            config,
        }
    }

    /// Returns the run configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Clears memory and resets the machine context.
    pub fn reset(&mut self) {
        self.memory = MemorySpace::with_trace_writes(self.config.general.trace_writes);
        self.context.reset();
    }

    /// Copies an in-memory image to address zero; returns the bytes stored.
    pub fn load_image(&mut self, image: &[u8]) -> usize {
        self.memory.load_image(image)
    }

    /// Loads an image file to address zero and reports its length and the
    /// bytes stored.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ImageUnavailable`] if the file cannot be read; memory
    /// is left unchanged in that case.
    pub fn load_image_file(&mut self, path: impl AsRef<Path>) -> Result<LoadedImage, SimError> {
        loader::load_image_file(&mut self.memory, path)
    }

    /// Runs the boot demonstration routine.
    pub fn run_boot(&mut self) -> BootTrace {
        boot::run_with_config(&mut self.memory, &mut self.context, &self.config)
    }

    /// Renders the configured text grid from display memory.
    pub fn screen_text(&self) -> String {
        let display = self.config.display;
        self.memory
            .display()
            .screen_text(self.memory.vram(), display.columns, display.rows)
    }
}
