use anyhow::{Context, Result};
use reqwest::blocking::Client;
use tracing::debug;

/// One fetch attempt: HTTP status and the raw body.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// Blocking single-shot GET. Transport errors are returned as `Err`,
/// HTTP error statuses come back as a `Page`.
pub trait PageFetcher {
    fn get(&self, url: &str) -> Result<Page>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<Page> {
        let resp = self
            .client
            .get(url)
            .send()
            .with_context(|| format!("GET {} failed", url))?;
        let status = resp.status().as_u16();
        let body = resp
            .text()
            .with_context(|| format!("Failed to read body of {}", url))?;
        debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(Page { status, body })
    }
}

/// Append one path segment to `base`, adding a `/` only when `base`
/// does not already end with one.
pub fn join_url(base: &str, segment: &str) -> String {
    if base.is_empty() || base.ends_with('/') {
        format!("{}{}", base, segment)
    } else {
        format!("{}/{}", base, segment)
    }
}
