use scraper::Html;

use super::{scrape_source, Amazon, Rakuten, SourceAdapter};
use crate::browser::MockFetcher;
use crate::core::{Record, NO_LINK, NO_PRICE, NO_RATING, NO_TITLE};

const RAKUTEN_PAGE: &str = r#"
<html><body>
  <div class="searchresultitem">
    <div class="title"><a href="https://item.rakuten.co.jp/shop/sauna-1/">Tent Sauna Deluxe</a></div>
    <div class="price">¥3,000</div>
    <div class="reviewAverage">4.5</div>
  </div>
  <div class="searchresultitem">
    <div class="price">¥1,500</div>
  </div>
</body></html>
"#;

const AMAZON_PAGE: &str = r#"
<html><body>
  <div class="s-result-item">
    <h2><a href="/dp/B000000"><span>Portable Sauna</span></a></h2>
    <span class="a-price-whole">12,800</span>
    <span class="a-icon-alt">4.5 out of 5 stars</span>
  </div>
  <div class="s-result-item"></div>
</body></html>
"#;

fn extract_all(adapter: &dyn SourceAdapter, page: &str) -> Vec<Record> {
    let document = Html::parse_document(page);
    document
        .select(adapter.item_selector())
        .map(|item| adapter.extract(item))
        .collect()
}

#[test]
fn rakuten_extracts_all_fields() {
    let records = extract_all(&Rakuten::new(), RAKUTEN_PAGE);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Tent Sauna Deluxe");
    assert_eq!(records[0].price, "¥3,000");
    assert_eq!(records[0].rating, "4.5");
    assert_eq!(records[0].link, "https://item.rakuten.co.jp/shop/sauna-1/");
}

#[test]
fn rakuten_missing_fields_degrade_to_sentinels() {
    let records = extract_all(&Rakuten::new(), RAKUTEN_PAGE);
    let bare = &records[1];
    assert_eq!(bare.title, NO_TITLE);
    assert_eq!(bare.price, "¥1,500");
    assert_eq!(bare.rating, NO_RATING);
    assert_eq!(bare.link, NO_LINK);
}

#[test]
fn amazon_keeps_only_the_leading_rating_token() {
    let records = extract_all(&Amazon::new(), AMAZON_PAGE);
    assert_eq!(records[0].rating, "4.5");
}

#[test]
fn amazon_resolves_relative_links_to_absolute() {
    let records = extract_all(&Amazon::new(), AMAZON_PAGE);
    assert_eq!(records[0].link, "https://www.amazon.co.jp/dp/B000000");
}

#[test]
fn amazon_empty_item_is_all_sentinels() {
    let records = extract_all(&Amazon::new(), AMAZON_PAGE);
    let bare = &records[1];
    assert_eq!(bare.title, NO_TITLE);
    assert_eq!(bare.price, NO_PRICE);
    assert_eq!(bare.rating, NO_RATING);
    assert_eq!(bare.link, NO_LINK);
}

#[test]
fn search_urls_encode_the_query() {
    let rakuten = Rakuten::new().search_url("tent sauna").unwrap();
    assert_eq!(
        rakuten.as_str(),
        "https://search.rakuten.co.jp/search/mall/tent%20sauna/"
    );

    let amazon = Amazon::new().search_url("tent sauna").unwrap();
    assert_eq!(amazon.as_str(), "https://www.amazon.co.jp/s?k=tent+sauna");
}

#[tokio::test]
async fn scrape_source_extracts_from_the_rendered_page() {
    let adapter = Rakuten::new();
    let url = adapter.search_url("sauna").unwrap();
    let fetcher = MockFetcher::new().with_page(url, RAKUTEN_PAGE);

    let records = scrape_source(&fetcher, &adapter, "sauna").await.unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].title, "Tent Sauna Deluxe");
}

#[tokio::test]
async fn both_sources_scrape_concurrently_and_merge() {
    let rakuten = Rakuten::new();
    let amazon = Amazon::new();
    let fetcher = MockFetcher::new()
        .with_page(rakuten.search_url("sauna").unwrap(), RAKUTEN_PAGE)
        .with_page(amazon.search_url("sauna").unwrap(), AMAZON_PAGE);

    let (from_rakuten, from_amazon) = tokio::try_join!(
        scrape_source(&fetcher, &rakuten, "sauna"),
        scrape_source(&fetcher, &amazon, "sauna"),
    )
    .unwrap();

    let mut records = from_rakuten;
    records.extend(from_amazon);
    assert_eq!(records.len(), 4);
    assert_eq!(records[0].title, "Tent Sauna Deluxe");
    assert_eq!(records[2].title, "Portable Sauna");
}

#[tokio::test]
async fn scrape_source_surfaces_fetch_failures() {
    let fetcher = MockFetcher::new();
    let result = scrape_source(&fetcher, &Rakuten::new(), "sauna").await;
    assert!(result.is_err());
}
