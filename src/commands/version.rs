//! Version command implementation

use std::fmt::Write as _;
use std::io::Write as _;

use crate::error::{Result, io_error};

/// Run version command
pub fn run() -> Result<()> {
    std::io::stdout()
        .lock()
        .write_all(report().as_bytes())
        .map_err(|e| io_error(format!("Failed to write to stdout: {e}")))
}

/// Version line, description and the build facts baked in at compile time
fn report() -> String {
    let mut out = format!(
        "{} {}\n{}\n\nBuild info:\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
    );
    let profile = if cfg!(debug_assertions) { "debug" } else { "release" };
    let _ = writeln!(out, "  Minimum Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    let _ = writeln!(out, "  Profile: {profile}");
    let _ = writeln!(out, "  Target OS: {}", std::env::consts::OS);
    out
}
