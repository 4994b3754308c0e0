// src/checker/extract.rs
// =============================================================================
// This module pulls the model's JSON answer out of a text file.
//
// Model output files look like this:
//
//   <echoed prompt, may itself contain {braces}>
//   AI Returned Links:
//   Sure! Here are the sources you asked for:
//   { "data_sources": [ ... ], "notes": { ... } }
//   Let me know if you need more.
//
// Two steps get us from that to a parsed object:
// 1. Cut the text at the response marker so the prompt is ignored
// 2. Scan for the first balanced { ... } block and parse it with serde_json
//
// Known limitation: the brace counter does not understand string literals,
// so a value like "a}b" moves the depth counter. We keep that behavior.
// =============================================================================

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::models::SourceEntry;

/// Reasons a file yields no entries at all.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no JSON block found")]
    NoJsonBlock,

    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The object parsed out of one file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub data_sources: Vec<SourceEntry>,
    #[serde(default = "empty_notes")]
    pub notes: Value,
}

fn empty_notes() -> Value {
    Value::Object(serde_json::Map::new())
}

// Returns the text starting at the marker, or the whole text when the
// marker is missing.
pub fn slice_from_marker<'a>(text: &'a str, marker: &str) -> &'a str {
    match text.find(marker) {
        Some(idx) => &text[idx..],
        None => text,
    }
}

// Returns the first top-level { ... } block, braces included.
//
// Examples:
//   "noise{a:1}{b:2}noise" -> Some("{a:1}")
//   "{a:{b:1}"             -> None (never balances)
//   "x } {y}"              -> Some("{y}") (a stray '}' at depth 0 is ignored)
pub fn extract_first_json_object(text: &str) -> Option<&str> {
    let mut depth: usize = 0;
    let mut start = 0;

    // '{' and '}' are single-byte in UTF-8, so byte offsets from
    // char_indices are always valid slice boundaries
    for (idx, ch) in text.char_indices() {
        match ch {
            '{' => {
                if depth == 0 {
                    start = idx;
                }
                depth += 1;
            }
            '}' if depth > 0 => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..=idx]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Runs both steps and parses the block.
pub fn parse_response(text: &str, marker: &str) -> Result<ExtractionResult, ExtractError> {
    let response = slice_from_marker(text, marker);
    let block = extract_first_json_object(response).ok_or(ExtractError::NoJsonBlock)?;
    Ok(serde_json::from_str(block)?)
}
