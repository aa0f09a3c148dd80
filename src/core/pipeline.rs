use log::{debug, info};

use super::record::Record;

/// Minimum rating a record needs to make it into the report.
pub const MIN_RATING: f64 = 4.0;

pub const REPORT_HEADER: [&str; 4] = ["Title", "Price", "Rating", "Link"];

/// Stable filter: keeps records rated at or above `threshold`, in their
/// original relative order. Unparseable ratings count as 0.0 and drop out.
pub fn filter_by_rating(records: Vec<Record>, threshold: f64) -> Vec<Record> {
    let before = records.len();
    let kept: Vec<Record> = records
        .into_iter()
        .filter(|r| r.rating_value() >= threshold)
        .collect();
    debug!(
        "Rating filter (>= {}): kept {} of {} records",
        threshold,
        kept.len(),
        before
    );
    kept
}

/// Sorts ascending by parsed price. Records whose price has no digits at all
/// have no meaningful position, so they sort last.
pub fn sort_by_price(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|r| r.price_minor_units().unwrap_or(u64::MAX));
    records
}

/// Full pipeline over the merged record set: filter, then sort.
pub fn run(records: Vec<Record>, threshold: f64) -> Vec<Record> {
    let total = records.len();
    let result = sort_by_price(filter_by_rating(records, threshold));
    info!("Pipeline produced {} report rows from {} records", result.len(), total);
    result
}

/// Spreadsheet payload: header row followed by one row per record,
/// price and rating in their raw textual form.
pub fn build_rows(records: Vec<Record>) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(records.len() + 1);
    rows.push(REPORT_HEADER.iter().map(|s| s.to_string()).collect());
    rows.extend(records.into_iter().map(Record::into_row));
    rows
}
