use anyhow::Result;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Url;

#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Retrieve the full body behind `url`. A single attempt, no retry.
    async fn fetch(&self, url: &Url) -> Result<Bytes>;
}
