/// Placeholder values substituted when a source page is missing a field.
/// Kept as plain strings so they round-trip into the report unchanged.
pub const NO_TITLE: &str = "No Title";
pub const NO_PRICE: &str = "No Price";
pub const NO_RATING: &str = "0";
pub const NO_LINK: &str = "No Link";

/// One normalized search-result item. Fields stay in their raw textual form;
/// the numeric views below exist only for filtering and sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub title: String,
    pub price: String,
    pub rating: String,
    pub link: String,
}

impl Record {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        rating: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            rating: rating.into(),
            link: link.into(),
        }
    }

    /// Rating as a float: the longest leading numeric prefix, so trailing
    /// text like "4.5点" still scores 4.5. No prefix at all counts as 0.0.
    pub fn rating_value(&self) -> f64 {
        let text = self.rating.trim();
        let mut end = 0;
        let mut seen_dot = false;
        for (i, c) in text.char_indices() {
            match c {
                '0'..='9' => end = i + 1,
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
        }
        text[..end].parse().unwrap_or(0.0)
    }

    /// Price reduced to an integer amount: every non-digit character is
    /// stripped, the rest parsed base-10. `None` when nothing is left,
    /// which is the case for the "No Price" sentinel.
    pub fn price_minor_units(&self) -> Option<u64> {
        let digits: String = self.price.chars().filter(|c| c.is_ascii_digit()).collect();
        digits.parse().ok()
    }

    /// Spreadsheet row in the fixed column order.
    pub fn into_row(self) -> Vec<String> {
        vec![self.title, self.price, self.rating, self.link]
    }
}
