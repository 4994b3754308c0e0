// src/checker/mod.rs
// =============================================================================
// This module contains the two leaf pieces of the validator.
//
// Submodules:
// - extract: Finds and parses the JSON answer inside a model-output file
// - http: Checks a single link with a HEAD request and classifies it
//
// This file is the module root; it re-exports the public API so callers can
// write `checker::check_link()` instead of `checker::http::check_link()`.
// =============================================================================

mod extract;
mod http;

pub use extract::{
    extract_first_json_object, parse_response, slice_from_marker, ExtractError, ExtractionResult,
};
pub use http::{check_link, classify_status, HttpProbe, LinkOutcome, LinkProbe, ProbeError};
