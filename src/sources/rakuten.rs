use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

use super::{absolute_href, select_text, SourceAdapter};
use crate::core::{Record, ScrapeResult, NO_LINK, NO_PRICE, NO_RATING, NO_TITLE};

const SEARCH_BASE: &str = "https://search.rakuten.co.jp/search/mall/";

static ITEM: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".searchresultitem").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".title").unwrap());
static PRICE: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".price").unwrap());
static RATING: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".reviewAverage").unwrap());
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".title a").unwrap());

/// Rakuten Ichiba mall search.
pub struct Rakuten {
    base: Url,
}

impl Default for Rakuten {
    fn default() -> Self {
        Self::new()
    }
}

impl Rakuten {
    pub fn new() -> Self {
        Self {
            base: Url::parse(SEARCH_BASE).unwrap(),
        }
    }
}

impl SourceAdapter for Rakuten {
    fn name(&self) -> &'static str {
        "rakuten"
    }

    fn search_url(&self, query: &str) -> ScrapeResult<Url> {
        // Query goes in as a percent-encoded path segment, trailing slash kept.
        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("base URL has a path")
            .pop_if_empty()
            .push(query)
            .push("");
        Ok(url)
    }

    fn item_selector(&self) -> &Selector {
        &ITEM
    }

    fn extract(&self, item: ElementRef<'_>) -> Record {
        let title = select_text(&item, &TITLE).unwrap_or_else(|| NO_TITLE.to_string());
        let price = select_text(&item, &PRICE).unwrap_or_else(|| NO_PRICE.to_string());
        let rating = select_text(&item, &RATING).unwrap_or_else(|| NO_RATING.to_string());
        let link =
            absolute_href(&item, &TITLE_LINK, &self.base).unwrap_or_else(|| NO_LINK.to_string());
        Record::new(title, price, rating, link)
    }
}
