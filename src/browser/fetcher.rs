use async_trait::async_trait;
use url::Url;

use crate::core::ScrapeResult;

/// Fetches one URL and returns the rendered page HTML. Implementations own
/// their session lifecycle; callers only see the final document.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: Url) -> ScrapeResult<String>;
}
