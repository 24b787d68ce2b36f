use crate::config::BotConfig;
use crate::fetchers::fetcher::{FetchError, PageFetcher, parse_url};
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder};
use tokio::time::{Duration, timeout};

/// Common WebDriver endpoints tried when the configured one is unreachable
const FALLBACK_WEBDRIVER_URLS: [&str; 4] = [
    "http://localhost:9515", // ChromeDriver default
    "http://localhost:4723", // Appium default
    "http://localhost:9222", // Chrome debug port default
    "http://127.0.0.1:4444", // Try with IP instead of localhost
];

/// Fetches pages by driving a real browser through WebDriver.
///
/// Each fetch opens its own session and closes it afterwards, so the fetcher
/// holds no connection state between calls.
pub struct WebDriverFetcher {
    webdriver_url: String,
    timeout_secs: u64,
}

impl WebDriverFetcher {
    pub fn new(config: &BotConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            timeout_secs: config.timeout_secs,
        }
    }

    /// Connects to the configured WebDriver, then to the fallbacks
    async fn connect(&self) -> Result<Client, FetchError> {
        match self.try_connect(&self.webdriver_url).await {
            Ok(client) => {
                ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);
                return Ok(client);
            }
            Err(e) => {
                ::log::error!(
                    "Failed to connect to WebDriver at {}: {}",
                    self.webdriver_url,
                    e
                );
            }
        }

        let mut tried = vec![self.webdriver_url.clone()];
        for url in FALLBACK_WEBDRIVER_URLS.iter() {
            if *url == self.webdriver_url {
                continue;
            }

            ::log::info!("Trying fallback WebDriver URL: {}", url);
            tried.push(url.to_string());
            if let Ok(client) = self.try_connect(url).await {
                ::log::debug!("Connected to fallback WebDriver at {}", url);
                return Ok(client);
            }
        }

        ::log::error!(
            "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
        );
        Err(FetchError::WebDriverConnect {
            tried: tried.join(", "),
        })
    }

    /// One connection attempt, bounded by the fetch timeout
    async fn try_connect(&self, webdriver_url: &str) -> Result<Client, String> {
        match timeout(
            Duration::from_secs(self.timeout_secs),
            ClientBuilder::native().connect(webdriver_url),
        )
        .await
        {
            Ok(Ok(client)) => Ok(client),
            Ok(Err(e)) => Err(e.to_string()),
            Err(_) => Err(format!("no answer within {}s", self.timeout_secs)),
        }
    }

    async fn page_source(client: &Client, url: &url::Url) -> Result<String, FetchError> {
        client
            .goto(url.as_str())
            .await
            .map_err(|e| navigation_error(e, "accessing", url))?;

        client
            .source()
            .await
            .map_err(|e| navigation_error(e, "getting source for", url))
    }
}

#[async_trait]
impl PageFetcher for WebDriverFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let parsed = parse_url(url)?;
        let start = std::time::Instant::now();
        let client = self.connect().await?;

        let result = timeout(
            Duration::from_secs(self.timeout_secs),
            Self::page_source(&client, &parsed),
        )
        .await;

        // Close the session whatever happened to the page
        if let Err(e) = client.close().await {
            ::log::warn!("Failed to close WebDriver session: {}", e);
        }

        let source = match result {
            Ok(source) => source?,
            Err(_) => {
                ::log::error!("Timeout fetching: {}", url);
                return Err(FetchError::Timeout {
                    url: url.to_string(),
                    secs: self.timeout_secs,
                });
            }
        };

        ::log::debug!(
            "Fetched {} through WebDriver in {:.2} seconds",
            url,
            start.elapsed().as_secs_f64()
        );
        Ok(source.into_bytes())
    }
}

/// Logs a navigation failure and wraps it
fn navigation_error(
    error: fantoccini::error::CmdError,
    context: &'static str,
    url: &url::Url,
) -> FetchError {
    if error.to_string().contains("Unable to find session") {
        ::log::warn!("Lost WebDriver session while {} {}", context, url);
    } else {
        ::log::error!("Failed {} {}: {}", context, url, error);
    }
    FetchError::WebDriver {
        context,
        url: url.to_string(),
        source: error,
    }
}
