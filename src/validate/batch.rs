// src/validate/batch.rs
// =============================================================================
// Runs the file processor over every input and writes the two output files.
//
// The batch owns the only shared state of a run: the set of links already
// accepted and the notes taken from the first file that has any. Outputs are
// written only after every file has been processed, so a run that fails
// midway leaves no partial output behind.
// =============================================================================

use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::file::process_file;
use crate::checker::LinkProbe;
use crate::config::{OutputPaths, ValidatorSettings};
use crate::models::{notes_are_empty, BatchReport, InvalidLinksDocument, ValidLinksDocument};

/// Processes `inputs` in order and merges their results.
pub async fn run_batch<P>(
    inputs: &[PathBuf],
    probe: &P,
    settings: &ValidatorSettings,
) -> Result<BatchReport>
where
    P: LinkProbe + ?Sized,
{
    let mut seen_links = HashSet::new();
    let mut report = BatchReport {
        valid: Vec::new(),
        invalid: Vec::new(),
        notes: Value::Object(serde_json::Map::new()),
        total: 0,
    };

    for input in inputs {
        let file_report = process_file(input, probe, settings, &mut seen_links).await?;

        report.valid.extend(file_report.valid);
        report.invalid.extend(file_report.invalid);
        report.total += file_report.total;

        // First non-empty notes win
        if notes_are_empty(&report.notes) && !notes_are_empty(&file_report.notes) {
            report.notes = file_report.notes;
        }
    }

    info!(
        "Total valid entries: {}/{} ({} invalid)",
        report.valid.len(),
        report.total,
        report.invalid.len()
    );

    Ok(report)
}

/// Writes `{country}_links.json` and `{country}_invalid_links.json`.
pub fn write_outputs(report: &BatchReport, paths: &OutputPaths) -> Result<()> {
    write_json(
        &paths.valid,
        &ValidLinksDocument {
            data_sources: &report.valid,
            notes: &report.notes,
        },
    )?;
    write_json(
        &paths.invalid,
        &InvalidLinksDocument {
            data_sources: &report.invalid,
        },
    )?;

    info!("Saved valid links to '{}'", paths.valid.display());
    info!("Saved invalid links to '{}'", paths.invalid.display());
    Ok(())
}

// Pretty-printed with two-space indent; serde_json leaves non-ASCII as-is
fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file '{}'", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(())
}
