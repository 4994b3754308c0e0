// src/lib.rs
// =============================================================================
// Library root of link-sieve; src/main.rs is a thin CLI on top of it.
//
// Modules:
// - checker: JSON block extraction and single-link HEAD checks
// - validate: per-file processing and the batch that writes the outputs
// - cli, config, logging, models: argument parsing, fixed settings,
//   log setup and the shared data types
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod validate;

#[cfg(test)]
mod test_utils;
