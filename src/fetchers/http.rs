use crate::config::BotConfig;
use crate::fetchers::fetcher::{FetchError, PageFetcher, parse_url};
use async_trait::async_trait;
use std::time::Duration;

/// Fetches pages with a plain HTTP GET
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher using the configured user agent and timeout
    pub fn new(config: &BotConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = parse_url(url)?;
        let start = std::time::Instant::now();

        let response = self.client.get(parsed).send().await?;
        let status = response.status();
        if !status.is_success() {
            ::log::warn!("{} returned {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        ::log::debug!(
            "Fetched {} ({} bytes) in {:.2} seconds",
            url,
            body.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(body.to_vec())
    }
}
