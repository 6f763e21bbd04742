// Remote playlist retrieval

use std::time::Duration;

use crate::error::{PlaylistError, Result};

/// Blocking HTTP fetcher for playlist documents
pub struct PlaylistFetcher {
    client: reqwest::blocking::Client,
}

impl PlaylistFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| PlaylistError::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// GET `url` and return its body as text.
    ///
    /// Invalid UTF-8 sequences are replaced rather than rejected. A body that
    /// is blank after trimming counts as a failed fetch.
    pub fn fetch(&self, url: &str) -> Result<String> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| PlaylistError::Fetch {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PlaylistError::Status {
                url: url.to_string(),
                status,
            });
        }

        let bytes = response.bytes().map_err(|source| PlaylistError::Fetch {
            url: url.to_string(),
            source,
        })?;
        log::debug!("Received {} bytes from {}", bytes.len(), url);

        let text = String::from_utf8_lossy(&bytes).into_owned();
        if text.trim().is_empty() {
            return Err(PlaylistError::EmptySource {
                url: url.to_string(),
            });
        }

        Ok(text)
    }
}
