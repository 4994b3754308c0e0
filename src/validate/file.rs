// src/validate/file.rs
// =============================================================================
// This module validates the links found in one model-output file.
//
// How it works:
// 1. Read the file and cut it at the "AI Returned Links:" marker
// 2. Pull out the first JSON block and parse it
// 3. Check every entry's link, one after another
// 4. Route each entry:
//      broken          -> invalid
//      unverifiable    -> invalid (logged separately)
//      valid, new link -> valid, and remember the link
//      valid, seen     -> dropped as redundant
//      non-string link -> invalid (unverifiable, never requested)
//      no link         -> dropped with a warning
//
// A file that has no JSON block or holds broken JSON contributes nothing;
// the run goes on with the next file. Failing to read the file at all is
// fatal and is returned as an error.
// =============================================================================

use anyhow::{Context, Result};
use log::{error, info, warn};
use std::collections::HashSet;
use std::path::Path;

use crate::checker::{self, ExtractError, LinkOutcome, LinkProbe, ProbeError};
use crate::config::ValidatorSettings;
use crate::models::{FileReport, LinkField};

// Processes one input file
//
// Parameters:
//   path: the model-output file to read
//   probe: what performs the HEAD requests
//   settings: marker and failure codes
//   seen_links: links already accepted as valid earlier in the run
//
// Returns: the entries of this file, sorted into valid/invalid, plus its notes
pub async fn process_file<P>(
    path: &Path,
    probe: &P,
    settings: &ValidatorSettings,
    seen_links: &mut HashSet<String>,
) -> Result<FileReport>
where
    P: LinkProbe + ?Sized,
{
    let file = path.display();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file '{}'", file))?;

    let extraction = match checker::parse_response(&text, settings.marker) {
        Ok(extraction) => extraction,
        Err(ExtractError::NoJsonBlock) => {
            warn!("No JSON block found in '{}'", file);
            return Ok(FileReport::empty());
        }
        Err(e @ ExtractError::Decode(_)) => {
            error!("{} in '{}'", e, file);
            return Ok(FileReport::empty());
        }
    };

    let total = extraction.data_sources.len();
    info!("Processing '{}': found {} sources", file, total);

    let mut report = FileReport {
        notes: extraction.notes,
        total,
        ..FileReport::empty()
    };

    for (idx, entry) in extraction.data_sources.into_iter().enumerate() {
        // Log lines use 1-based positions, like the entry numbers a human counts
        let idx = idx + 1;

        let link = match entry.link_field() {
            LinkField::Url(link) => link.to_string(),
            LinkField::NotAString(value) => {
                // Can't be requested, so it is unverifiable rather than missing
                let reason = ProbeError::InvalidUrl(format!("'link' is not a string: {}", value));
                error!(
                    "[UNVERIFIABLE] {} #{}: {} could not be checked: {}",
                    file, idx, value, reason
                );
                report.invalid.push(entry);
                continue;
            }
            LinkField::Missing => {
                warn!("[NO LINK] {} #{}: no 'link' field found", file, idx);
                report.missing_link.push(idx);
                continue;
            }
        };

        match checker::check_link(probe, &link, settings.failure_codes).await {
            LinkOutcome::Broken { status } => {
                warn!("[BROKEN] {} #{}: {} (status {})", file, idx, link, status);
                report.invalid.push(entry);
            }
            LinkOutcome::Unverifiable { reason } => {
                error!(
                    "[UNVERIFIABLE] {} #{}: {} could not be checked: {}",
                    file, idx, link, reason
                );
                report.invalid.push(entry);
            }
            LinkOutcome::Valid { status } => {
                // insert() returns false when the link was already there
                if seen_links.insert(link.clone()) {
                    info!("[OK] {} #{}: {} (status {})", file, idx, link, status);
                    report.valid.push(entry);
                } else {
                    info!(
                        "[REDUNDANT] {} #{}: {} (status {}) already collected, dropping",
                        file, idx, link, status
                    );
                    report.redundant.push(idx);
                }
            }
        }
    }

    info!(
        "Valid entries in '{}': {}/{}",
        file,
        report.valid.len(),
        report.total
    );

    Ok(report)
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why is seen_links a &mut HashSet?
//    - The batch owns one set for the whole run and lends it to each file
//    - A link accepted from file 1 makes the same link in file 2 redundant
//    - Only valid links go into the set, so a link that was broken earlier
//      can still be accepted later
//
// 2. Why `e @ ExtractError::Decode(_)`?
//    - The @ binding keeps the whole error while matching on its variant,
//      so we can log it with its Display message
// -----------------------------------------------------------------------------
