// src/config.rs
// =============================================================================
// Fixed settings for a validation run.
//
// Nothing here is read from the environment or the command line: the
// marker, timeout and failure codes are constants of the tool. They are
// gathered into one immutable `ValidatorSettings` value that main() builds
// once and hands to the rest of the program.
// =============================================================================

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Text that precedes the model's answer in every input file.
/// Anything before it is the echoed prompt and must not be parsed.
pub const RESPONSE_MARKER: &str = "AI Returned Links:";

/// Timeout for a single HEAD request.
pub const HEAD_TIMEOUT: Duration = Duration::from_secs(5);

/// Status codes that mark a link as broken. Every other code is valid.
pub const FAILURE_STATUS_CODES: [u16; 11] = [204, 400, 401, 404, 405, 408, 410, 429, 502, 503, 504];

#[derive(Debug, Clone)]
pub struct ValidatorSettings {
    pub marker: &'static str,
    pub timeout: Duration,
    pub failure_codes: &'static [u16],
    /// Directory the output files are written to
    pub output_dir: PathBuf,
}

impl ValidatorSettings {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            marker: RESPONSE_MARKER,
            timeout: HEAD_TIMEOUT,
            failure_codes: &FAILURE_STATUS_CODES,
            output_dir: output_dir.into(),
        }
    }

    pub fn is_failure_code(&self, status: u16) -> bool {
        self.failure_codes.contains(&status)
    }

    pub fn output_paths(&self, country: &str) -> OutputPaths {
        OutputPaths::for_country(&self.output_dir, country)
    }
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self::new(".")
    }
}

/// The three files a run produces for one country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub valid: PathBuf,
    pub invalid: PathBuf,
    pub log: PathBuf,
}

impl OutputPaths {
    pub fn for_country(dir: &Path, country: &str) -> Self {
        Self {
            valid: dir.join(format!("{}_links.json", country)),
            invalid: dir.join(format!("{}_invalid_links.json", country)),
            // The log name is kept as the downstream tooling expects it
            log: dir.join(format!("{}_linvalid_link.log", country)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_paths_use_country_name() {
        let paths = OutputPaths::for_country(Path::new("out"), "Peru");
        assert_eq!(paths.valid, Path::new("out").join("Peru_links.json"));
        assert_eq!(paths.invalid, Path::new("out").join("Peru_invalid_links.json"));
        assert_eq!(paths.log, Path::new("out").join("Peru_linvalid_link.log"));
    }

    #[test]
    fn test_failure_codes() {
        let settings = ValidatorSettings::default();
        assert!(settings.is_failure_code(404));
        assert!(settings.is_failure_code(204));
        assert!(!settings.is_failure_code(200));
        assert!(!settings.is_failure_code(500));
    }
}
