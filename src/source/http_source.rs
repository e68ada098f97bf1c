use std::collections::HashMap;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Url};
use tracing::{debug, warn};

use super::traits::ImageFetcher;

/// HTTP(S) transport backed by a shared reqwest client.
pub struct HttpFetcher {
    client: Client,
    headers: HashMap<String, String>,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            headers: HashMap::new(),
        }
    }

    /// Attach headers sent with every request (e.g. authorization).
    pub fn with_headers(headers: HashMap<String, String>) -> Self {
        Self {
            client: Client::new(),
            headers,
        }
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Bytes> {
        let mut req = self.client.get(url.clone());
        for (k, v) in &self.headers {
            req = req.header(k.as_str(), v.as_str());
        }

        let resp = req.send().await?;

        let status = resp.status();
        debug!("http fetch status={} url={}", status.as_u16(), url);
        if !status.is_success() {
            warn!("http fetch failed status={} url={}", status.as_u16(), url);
            return Err(anyhow!("fetch failed: HTTP {}", status.as_u16()));
        }

        let bytes = resp.bytes().await?;
        Ok(bytes)
    }
}
