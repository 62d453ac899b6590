//! Raw-text debug sink for development.
//!
//! The TUI owns the terminal, so print-style debugging scrambles the
//! screen; this appends to a scratch file instead. `tracing` remains the
//! real observability layer — this is the last-resort escape hatch when
//! poking at something locally.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use crate::sys::retry::retry_on_interrupt;

/// Fixed sink path, relative to the working directory.
pub const DEBUG_LOG_FILE: &str = "preen-debug.log";

/// Append raw text to [`DEBUG_LOG_FILE`]. Any I/O failure is swallowed:
/// a diagnostics sink must never take the client down.
pub fn debug_to_file(text: &str) {
    let _ = append_to(Path::new(DEBUG_LOG_FILE), text);
}

fn append_to(path: &Path, text: &str) -> io::Result<()> {
    retry_on_interrupt(|| {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(text.as_bytes())
    })
}
