use crate::categories::CategoryPage;
use crate::fetchers::{FetchError, PageFetcher};
use crate::parsers;
use crate::results::LimitedItem;

/// A single category lookup: fetch the page, extract the items
pub struct Lookup<'a> {
    // The category to query
    category: &'static CategoryPage,

    // Fetcher used to download the category page
    fetcher: &'a dyn PageFetcher,
}

impl<'a> Lookup<'a> {
    /// Create a new Lookup for the given category
    pub fn new(category: &'static CategoryPage, fetcher: &'a dyn PageFetcher) -> Self {
        Self { category, fetcher }
    }

    /// Fetch the category page and return its limited-time items
    pub async fn run(self) -> Result<Vec<LimitedItem>, FetchError> {
        ::log::info!(
            "Looking up limited {} at {}",
            self.category.label,
            self.category.url
        );

        let body = self.fetcher.fetch(self.category.url).await?;

        let items = parsers::extract_limited_items(&body);
        ::log::info!(
            "Found {} limited items for {}",
            items.len(),
            self.category.label
        );
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories;
    use async_trait::async_trait;

    /// Serves the same page for every URL
    struct FixedPage(&'static str);

    #[async_trait]
    impl PageFetcher for FixedPage {
        async fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
            Ok(self.0.as_bytes().to_vec())
        }
    }

    #[tokio::test]
    async fn test_run_extracts_from_fetched_page() {
        let fetcher = FixedPage(
            r#"<li class="product-list-card" data-time-limited-offer-started-at="1">
                 <p class="product-list-card-name">ベーコンポテトパイ</p>
               </li>"#,
        );
        let category = categories::find("3").unwrap();
        let items = Lookup::new(category, &fetcher).run().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "ベーコンポテトパイ");
        assert_eq!(items[0].price, "不明");
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_errors() {
        struct Failing;

        #[async_trait]
        impl PageFetcher for Failing {
            async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
                Err(FetchError::Timeout {
                    url: url.to_string(),
                    secs: 1,
                })
            }
        }

        let category = categories::find("1").unwrap();
        let result = Lookup::new(category, &Failing).run().await;
        assert!(matches!(result, Err(FetchError::Timeout { .. })));
    }
}
