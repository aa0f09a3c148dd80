use super::pipeline::{build_rows, filter_by_rating, run, sort_by_price, MIN_RATING};
use super::record::{Record, NO_LINK, NO_PRICE, NO_RATING, NO_TITLE};

fn record(title: &str, price: &str, rating: &str, link: &str) -> Record {
    Record::new(title, price, rating, link)
}

#[test]
fn sentinel_record_has_degraded_numeric_views() {
    let r = record(NO_TITLE, NO_PRICE, NO_RATING, NO_LINK);
    assert_eq!(r.rating_value(), 0.0);
    assert_eq!(r.price_minor_units(), None);
}

#[test]
fn price_parsing_strips_currency_formatting() {
    assert_eq!(record("a", "¥3,000", "5", "l").price_minor_units(), Some(3000));
    assert_eq!(record("a", "1,234円", "5", "l").price_minor_units(), Some(1234));
    assert_eq!(record("a", "980", "5", "l").price_minor_units(), Some(980));
}

#[test]
fn unparseable_rating_counts_as_zero() {
    assert_eq!(record("a", "1", "great!", "l").rating_value(), 0.0);
    assert_eq!(record("a", "1", "", "l").rating_value(), 0.0);
    assert_eq!(record("a", "1", " 4.5 ", "l").rating_value(), 4.5);
}

#[test]
fn rating_parses_the_leading_numeric_prefix() {
    assert_eq!(record("a", "1", "4.5点", "l").rating_value(), 4.5);
    assert_eq!(record("a", "1", "4.5 out of 5 stars", "l").rating_value(), 4.5);
    assert_eq!(record("a", "1", "4.", "l").rating_value(), 4.0);
    assert_eq!(record("a", "1", "点4.5", "l").rating_value(), 0.0);
}

#[test]
fn prefix_rated_records_survive_the_filter() {
    let input = vec![record("a", "¥1,000", "4.5点", "l")];
    let out = filter_by_rating(input, MIN_RATING);
    assert_eq!(out.len(), 1);
}

#[test]
fn filter_is_a_stable_subsequence_at_the_threshold() {
    let input = vec![
        record("a", "1", "4.0", "l"),
        record("b", "2", "3.999", "l"),
        record("c", "3", "4.5", "l"),
        record("d", "4", NO_RATING, "l"),
        record("c", "3", "4.5", "l"), // duplicate survives too
    ];
    let out = filter_by_rating(input, MIN_RATING);
    let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, vec!["a", "c", "c"]);
}

#[test]
fn sort_orders_ascending_by_parsed_price() {
    let input = vec![
        record("x", "¥3,000", "5", "l"),
        record("y", "¥1,500", "5", "l"),
        record("z", "¥2,000", "5", "l"),
    ];
    let out = sort_by_price(input);
    let prices: Vec<u64> = out.iter().map(|r| r.price_minor_units().unwrap()).collect();
    assert_eq!(prices, vec![1500, 2000, 3000]);
}

#[test]
fn unpriced_records_sort_last() {
    let input = vec![
        record("none", NO_PRICE, "5", "l"),
        record("cheap", "¥100", "5", "l"),
    ];
    let out = sort_by_price(input);
    assert_eq!(out[0].title, "cheap");
    assert_eq!(out[1].title, "none");
}

#[test]
fn merge_order_does_not_affect_the_report() {
    let site_a = vec![
        record("a1", "¥2,000", "4.2", "l"),
        record("a2", "¥900", "4.8", "l"),
    ];
    let site_b = vec![
        record("b1", "¥1,500", "4.0", "l"),
        record("b2", "¥300", "2.0", "l"),
    ];

    let mut ab = site_a.clone();
    ab.extend(site_b.clone());
    let mut ba = site_b;
    ba.extend(site_a);

    assert_eq!(run(ab, MIN_RATING), run(ba, MIN_RATING));
}

#[test]
fn end_to_end_rows_keep_raw_text_and_prepend_header() {
    let records = vec![
        record("A", "¥2,000", "4.5", "http://x"),
        record("B", "¥1,000", "3.9", "http://y"),
    ];
    let rows = build_rows(run(records, MIN_RATING));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0], vec!["Title", "Price", "Rating", "Link"]);
    assert_eq!(rows[1], vec!["A", "¥2,000", "4.5", "http://x"]);
}
