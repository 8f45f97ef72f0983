// 🌐 Fetcher - Where documents come from
//
// One trait, two implementations:
// - HttpFetcher: blocking HTTP(S) against the live endpoints
// - StaticFetcher: in-memory URL → body map (offline fixtures, tests)
//
// Sequential by design: no timeouts, no retries.

use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    #[error("No document registered for {0}")]
    NotFound(String),
}

// ============================================================================
// FETCHER TRAIT
// ============================================================================

/// Fetcher - Retrieve a document body by URL
pub trait Fetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url)
    }
}

// ============================================================================
// HTTP
// ============================================================================

const USER_AGENT: &str = concat!("bundestag-scraper/", env!("CARGO_PKG_VERSION"));

/// Blocking HTTP fetcher
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(None::<std::time::Duration>)
            .build()?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text()?)
    }
}

// ============================================================================
// IN-MEMORY
// ============================================================================

/// In-memory fetcher: serves registered bodies, fails on anything else
#[derive(Debug, Default, Clone)]
pub struct StaticFetcher {
    documents: HashMap<String, String>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: register a document
    pub fn with(mut self, url: &str, body: &str) -> Self {
        self.insert(url, body);
        self
    }

    pub fn insert(&mut self, url: &str, body: &str) {
        self.documents.insert(url.to_string(), body.to_string());
    }
}

impl Fetcher for StaticFetcher {
    fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.documents
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(url.to_string()))
    }
}
