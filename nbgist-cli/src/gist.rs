//! Gist loading
//!
//! Talks to the gist-hosting API: one listing fetch per identifier, plus one
//! raw-content fetch for each file the API reports as truncated. There is no
//! retry, caching, or timeout policy; a failed fetch propagates as a
//! [`GistError`] and the render is abandoned.

use serde::Deserialize;
use std::fmt;

/// Errors from gist fetching
#[derive(Debug)]
pub enum GistError {
    /// Transport-level failure issuing a request
    Network(String),
    /// Non-success status from the API
    Status { status: u16, url: String },
    /// Response body did not decode as expected
    Decode(String),
}

impl fmt::Display for GistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GistError::Network(msg) => write!(f, "Network error: {msg}"),
            GistError::Status { status, url } => {
                write!(f, "Request to {url} failed with status {status}")
            }
            GistError::Decode(msg) => write!(f, "Decode error: {msg}"),
        }
    }
}

impl std::error::Error for GistError {}

/// A gist listing: named files in the order the API returned them.
#[derive(Debug, Deserialize)]
pub struct Gist {
    /// Filename → file entry; serde_json's preserve_order keeps the API's
    /// insertion order, which defines rendering order.
    #[serde(default)]
    pub files: serde_json::Map<String, serde_json::Value>,
}

/// One file entry in a gist listing.
#[derive(Debug, Deserialize)]
pub struct GistFile {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub truncated: bool,
    #[serde(default)]
    pub raw_url: Option<String>,
}

impl Gist {
    /// Decode the file entries, preserving listing order. Entries that do not
    /// decode are dropped with a warning rather than failing the listing.
    pub fn into_files(self) -> Vec<(String, GistFile)> {
        let mut files = Vec::with_capacity(self.files.len());
        for (name, value) in self.files {
            match serde_json::from_value::<GistFile>(value) {
                Ok(file) => files.push((name, file)),
                Err(e) => log::warn!("unreadable listing entry '{name}': {e}"),
            }
        }
        files
    }
}

/// Blocking client for the gist-hosting API.
pub struct GistClient {
    http: reqwest::blocking::Client,
    api_url: String,
}

impl GistClient {
    pub fn new(api_url: &str) -> Result<Self, GistError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("nbgist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| GistError::Network(e.to_string()))?;
        Ok(Self {
            http,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the file listing for a gist identifier.
    pub fn fetch_gist(&self, id: &str) -> Result<Gist, GistError> {
        let url = format!("{}/gists/{id}", self.api_url);
        log::info!("fetching gist listing {url}");

        let response = self
            .http
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .map_err(|e| GistError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GistError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .text()
            .map_err(|e| GistError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| GistError::Decode(e.to_string()))
    }

    /// Secondary fetch for a file whose inline content was truncated.
    pub fn fetch_raw(&self, raw_url: &str) -> Result<String, GistError> {
        log::info!("fetching raw content {raw_url}");

        let response = self
            .http
            .get(raw_url)
            .send()
            .map_err(|e| GistError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GistError::Status {
                status: status.as_u16(),
                url: raw_url.to_string(),
            });
        }

        response.text().map_err(|e| GistError::Decode(e.to_string()))
    }
}
