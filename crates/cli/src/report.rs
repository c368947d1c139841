//! Text rendering of a boot run.
//!
//! The core library only returns structured reports; this module turns them into
//! the console transcript.

use std::io::{self, Write};

use cisc16_core::sim::{BootTrace, LoadedImage};

/// Writes the load line. The count is the file length, even when the image was
/// truncated to fit memory.
pub fn render_loaded(out: &mut impl Write, loaded: &LoadedImage) -> io::Result<()> {
    writeln!(out, "OS loaded: {} bytes", loaded.image_len)
}

/// Writes the boot transcript: a header, each phase with its display writes,
/// and the final CPU state.
///
/// When `show_writes` is false only the phase headings and the state are printed.
pub fn render_trace(out: &mut impl Write, trace: &BootTrace, show_writes: bool) -> io::Result<()> {
    writeln!(out, "=== CISC-16-A OS Simulation ===")?;
    writeln!(out, "Simulating basic OS execution...")?;
    writeln!(out)?;

    for step in &trace.steps {
        writeln!(out, "{}", step.phase)?;
        if show_writes && !step.writes.is_empty() {
            let line = step
                .writes
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(out, "{line}")?;
        }
    }

    writeln!(out)?;
    writeln!(out, "=== Simulation Complete ===")?;
    writeln!(out)?;
    writeln!(out, "{}", trace.snapshot)
}

/// Writes a one-line error message.
pub fn render_error(out: &mut impl Write, err: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "Error: {err}")
}

/// Writes the rendered text grid inside a simple frame.
pub fn render_screen(out: &mut impl Write, screen: &str) -> io::Result<()> {
    let width = screen.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let rule = format!("+{}+", "-".repeat(width));
    writeln!(out, "{rule}")?;
    for line in screen.lines() {
        writeln!(out, "|{line:<width$}|")?;
    }
    writeln!(out, "{rule}")
}
