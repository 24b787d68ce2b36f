use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while downloading a category page
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    #[error("failed to connect to any WebDriver server (tried {tried})")]
    WebDriverConnect { tried: String },

    #[error("WebDriver failed while {context} {url}: {source}")]
    WebDriver {
        context: &'static str,
        url: String,
        #[source]
        source: fantoccini::error::CmdError,
    },

    #[error("timed out after {secs}s fetching {url}")]
    Timeout { url: String, secs: u64 },
}

/// Something that can download a page and hand back its raw body
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the document at `url`
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// Validate a URL before any request goes out
pub(crate) fn parse_url(url: &str) -> Result<url::Url, FetchError> {
    url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}
