// src/checker/http.rs
// =============================================================================
// This module checks if a single URL is alive with an HTTP HEAD request.
//
// Key functionality:
// - One HEAD request per link, 5 second timeout, no retries, no redirects
// - Status codes in the failure set mean "broken", any other code is "valid"
// - Network-level failures (DNS, refused connection, timeout, bad URL)
//   mean "unverifiable"
//
// The request itself sits behind the `LinkProbe` trait. The real
// implementation wraps a reqwest Client; tests plug in a stub that returns
// canned status codes.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Why a link could not be checked at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Result of checking one link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Server answered with a status outside the failure set
    Valid { status: u16 },
    /// Server answered with a status in the failure set
    Broken { status: u16 },
    /// No answer at all
    Unverifiable { reason: String },
}

impl LinkOutcome {
    /// Valid and Broken carry a real status code, Unverifiable never does.
    pub fn status(&self) -> Option<u16> {
        match self {
            LinkOutcome::Valid { status } | LinkOutcome::Broken { status } => Some(*status),
            LinkOutcome::Unverifiable { .. } => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, LinkOutcome::Valid { .. })
    }
}

/// Something that can answer "what status does this URL return to HEAD?".
#[async_trait]
pub trait LinkProbe {
    async fn head_status(&self, url: &str) -> Result<u16, ProbeError>;
}

/// The real probe, backed by reqwest.
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    // Redirects are not followed: a 3xx answer is the status we classify
    pub fn new(timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl LinkProbe for HttpProbe {
    async fn head_status(&self, url: &str) -> Result<u16, ProbeError> {
        // Catch garbage like "www.example.com" or "N/A" before going to the network
        Url::parse(url).map_err(|e| ProbeError::InvalidUrl(format!("{}: {}", url, e)))?;

        match self.client.head(url).send().await {
            Ok(response) => Ok(response.status().as_u16()),
            Err(e) => Err(categorize_error(e)),
        }
    }
}

// Sorts reqwest failures into our error kinds
fn categorize_error(error: reqwest::Error) -> ProbeError {
    if error.is_timeout() {
        ProbeError::Timeout
    } else if error.is_connect() {
        ProbeError::Connect(error.to_string())
    } else if error.is_builder() {
        ProbeError::InvalidUrl(error.to_string())
    } else {
        ProbeError::Request(error.to_string())
    }
}

/// Classifies a status code against the failure set.
pub fn classify_status(status: u16, failure_codes: &[u16]) -> LinkOutcome {
    if failure_codes.contains(&status) {
        LinkOutcome::Broken { status }
    } else {
        LinkOutcome::Valid { status }
    }
}

/// Checks one link. Never fails: probe errors become `Unverifiable`.
pub async fn check_link<P>(probe: &P, url: &str, failure_codes: &[u16]) -> LinkOutcome
where
    P: LinkProbe + ?Sized,
{
    match probe.head_status(url).await {
        Ok(status) => classify_status(status, failure_codes),
        Err(e) => LinkOutcome::Unverifiable { reason: e.to_string() },
    }
}
