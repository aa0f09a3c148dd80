use async_trait::async_trait;
use std::collections::HashMap;
use url::Url;

use super::Fetcher;
use crate::core::{ScrapeError, ScrapeResult};

/// Canned-response fetcher for tests. Unknown URLs come back as a browser
/// error, matching a failed navigation.
#[derive(Clone, Default)]
pub struct MockFetcher {
    pages: HashMap<Url, String>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: Url, body: impl Into<String>) -> Self {
        self.pages.insert(url, body.into());
        self
    }
}

#[async_trait]
impl Fetcher for MockFetcher {
    async fn fetch(&self, url: Url) -> ScrapeResult<String> {
        self.pages
            .get(&url)
            .cloned()
            .ok_or_else(|| ScrapeError::BrowserError(format!("no mock page for {url}")))
    }
}
