mod amazon;
mod rakuten;

#[cfg(test)]
mod tests;

pub use amazon::Amazon;
pub use rakuten::Rakuten;

use log::info;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::browser::Fetcher;
use crate::core::{Record, ScrapeResult};

/// Per-site extraction logic. One implementation per source; adding a source
/// means adding an adapter, the pipeline stays untouched.
pub trait SourceAdapter: Send + Sync {
    fn name(&self) -> &'static str;

    /// Search-results URL for the given query.
    fn search_url(&self, query: &str) -> ScrapeResult<Url>;

    /// Selector matching one result item on the page.
    fn item_selector(&self) -> &Selector;

    /// Maps one result item to a Record. Missing sub-fields degrade to
    /// sentinel values, never to an error.
    fn extract(&self, item: ElementRef<'_>) -> Record;
}

/// Runs one source end to end: build the search URL, render the page,
/// extract every result item.
pub async fn scrape_source(
    fetcher: &dyn Fetcher,
    adapter: &dyn SourceAdapter,
    query: &str,
) -> ScrapeResult<Vec<Record>> {
    let url = adapter.search_url(query)?;
    info!("Scraping {}: {}", adapter.name(), url);

    let body = fetcher.fetch(url).await?;
    let document = Html::parse_document(&body);
    let records: Vec<Record> = document
        .select(adapter.item_selector())
        .map(|item| adapter.extract(item))
        .collect();

    info!("{}: extracted {} records", adapter.name(), records.len());
    Ok(records)
}

/// Text content of the first match under `item`, trimmed. `None` when the
/// element is absent.
fn select_text(item: &ElementRef<'_>, selector: &Selector) -> Option<String> {
    item.select(selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
}

/// `href` of the first match, resolved against `base` so relative links come
/// out absolute.
fn absolute_href(item: &ElementRef<'_>, selector: &Selector, base: &Url) -> Option<String> {
    item.select(selector)
        .next()
        .and_then(|el| el.value().attr("href"))
        .and_then(|href| base.join(href).ok())
        .map(|url| url.to_string())
}
