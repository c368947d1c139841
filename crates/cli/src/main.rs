//! CISC-16-A machine model CLI.
//!
//! This binary loads an OS image and runs the scripted boot routine. It performs:
//! 1. **Load:** Copy the image file to address `0x0000` (exit 1 if unreadable).
//! 2. **Boot:** Run the boot routine against a fresh machine.
//! 3. **Report:** Print each phase, the display writes it made, and the CPU state.
//!
//! Logs go to stderr and are filtered by `RUST_LOG` (default `warn`); stdout
//! carries only the transcript.

mod report;

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

use cisc16_core::Simulator;
use cisc16_core::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "cisc16",
    author,
    version,
    about = "CISC-16-A machine model",
    long_about = "Load a CISC-16-A OS image at 0x0000 and run the scripted boot routine.\n\nEvery write to the memory-mapped display (0x8000-0x8FFF) is reported, followed by the final CPU state.\n\nExamples:\n  cisc16 os_nasm.bin\n  cisc16 os_nasm.bin --screen --quiet-vga\n  cisc16 os_nasm.bin --config boot.json --json"
)]
struct Cli {
    /// OS image to load at address 0x0000.
    image: PathBuf,

    /// JSON configuration file (display geometry, boot text, logging).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print individual display writes.
    #[arg(long)]
    quiet_vga: bool,

    /// Print the text screen after boot.
    #[arg(long)]
    screen: bool,

    /// Print the final CPU state as JSON instead of the transcript.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref().map(|p| Config::from_file(p)).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => fail(&e),
    };
    tracing::debug!(?config, "configuration");

    let mut sim = Simulator::new(config);
    let loaded = match sim.load_image_file(&cli.image) {
        Ok(loaded) => loaded,
        Err(e) => fail(&e),
    };

    let trace = sim.run_boot();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = if cli.json {
        serde_json::to_string_pretty(&trace.snapshot)
            .map_err(io::Error::other)
            .and_then(|json| writeln!(out, "{json}"))
    } else {
        report::render_loaded(&mut out, &loaded)
            .and_then(|()| report::render_trace(&mut out, &trace, !cli.quiet_vga))
    };
    let result = result.and_then(|()| {
        if cli.screen {
            report::render_screen(&mut out, &sim.screen_text())
        } else {
            Ok(())
        }
    });

    if let Err(e) = result.and_then(|()| out.flush()) {
        fail(&e);
    }
}

/// Prints `err` to stderr and exits with status 1.
fn fail(err: &dyn std::error::Error) -> ! {
    let _ = report::render_error(&mut io::stderr().lock(), err);
    process::exit(1);
}
