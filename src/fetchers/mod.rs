pub mod fetcher;
pub mod http;
pub mod web;

pub use fetcher::{FetchError, PageFetcher};
pub use http::HttpFetcher;
pub use web::WebDriverFetcher;

use crate::config::{BotConfig, FetcherKind};

/// Builds the fetcher selected in the configuration
pub fn from_config(config: &BotConfig) -> Result<Box<dyn PageFetcher>, FetchError> {
    match config.fetcher {
        FetcherKind::Http => {
            ::log::debug!("Using HTTP fetcher");
            Ok(Box::new(HttpFetcher::new(config)?))
        }
        FetcherKind::Webdriver => {
            ::log::debug!("Using WebDriver fetcher at {}", config.webdriver_url);
            Ok(Box::new(WebDriverFetcher::new(config)))
        }
    }
}
