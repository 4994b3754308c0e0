// src/logging.rs
// =============================================================================
// Sets up env_logger so every log line goes to two places:
// - stderr, for watching a run as it happens
// - {country}_linvalid_link.log, kept next to the outputs
//
// Lines look like `INFO - Processing 'gpt-4.1_Peru.txt': found 12 sources`.
// The level filter defaults to `info` and can be changed with RUST_LOG.
// =============================================================================

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Writer that copies everything to stderr and to a file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Installs the global logger. Call once, before any work starts.
pub fn init(log_path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file '{}'", log_path.display()))?;

    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| writeln!(buf, "{} - {}", record.level(), record.args()))
        .target(Target::Pipe(Box::new(TeeWriter { file })))
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}
