use scraper::{ElementRef, Selector};
use std::sync::LazyLock;
use url::Url;

use super::{absolute_href, select_text, SourceAdapter};
use crate::core::{Record, ScrapeResult, NO_LINK, NO_PRICE, NO_RATING, NO_TITLE};

const SEARCH_BASE: &str = "https://www.amazon.co.jp/";

static ITEM: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".s-result-item").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 a span").unwrap());
static PRICE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(".a-price-whole").unwrap());
static RATING: LazyLock<Selector> = LazyLock::new(|| Selector::parse(".a-icon-alt").unwrap());
static TITLE_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h2 a").unwrap());

/// Amazon.co.jp search.
pub struct Amazon {
    base: Url,
}

impl Default for Amazon {
    fn default() -> Self {
        Self::new()
    }
}

impl Amazon {
    pub fn new() -> Self {
        Self {
            base: Url::parse(SEARCH_BASE).unwrap(),
        }
    }
}

impl SourceAdapter for Amazon {
    fn name(&self) -> &'static str {
        "amazon"
    }

    fn search_url(&self, query: &str) -> ScrapeResult<Url> {
        let mut url = self.base.join("s")?;
        url.query_pairs_mut().append_pair("k", query);
        Ok(url)
    }

    fn item_selector(&self) -> &Selector {
        &ITEM
    }

    fn extract(&self, item: ElementRef<'_>) -> Record {
        let title = select_text(&item, &TITLE).unwrap_or_else(|| NO_TITLE.to_string());
        let price = select_text(&item, &PRICE).unwrap_or_else(|| NO_PRICE.to_string());
        // Rating text reads like "4.5 out of 5 stars"; only the leading
        // numeric token is kept.
        let rating = select_text(&item, &RATING)
            .and_then(|text| text.split_whitespace().next().map(str::to_string))
            .unwrap_or_else(|| NO_RATING.to_string());
        let link =
            absolute_href(&item, &TITLE_LINK, &self.base).unwrap_or_else(|| NO_LINK.to_string());
        Record::new(title, price, rating, link)
    }
}
