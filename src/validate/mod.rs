// src/validate/mod.rs
// =============================================================================
// The validation pipeline built on top of the checker.
//
// Submodules:
// - file: Validates the entries of a single model-output file
// - batch: Runs every input through `file`, merges, writes outputs
// =============================================================================

mod batch;
mod file;

pub use batch::{run_batch, write_outputs};
pub use file::process_file;
