use std::env;
use std::path::PathBuf;

use crate::core::pipeline::MIN_RATING;
use crate::core::{ScrapeError, ScrapeResult};

/// Query the original report was built around.
pub const DEFAULT_QUERY: &str = "モルジュ テントサウナ";

const DEFAULT_RANGE: &str = "Sheet1!A1";

/// Runtime configuration, read from `SHOPSCOUT_*` environment variables.
/// Only the spreadsheet id is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub spreadsheet_id: String,
    pub range: String,
    pub query: String,
    pub credentials_path: PathBuf,
    pub token_path: PathBuf,
    pub min_rating: f64,
}

impl Config {
    pub fn from_env() -> ScrapeResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ScrapeResult<Self> {
        let spreadsheet_id = lookup("SHOPSCOUT_SHEET_ID").ok_or_else(|| {
            ScrapeError::ConfigError("SHOPSCOUT_SHEET_ID is not set".to_string())
        })?;

        let min_rating = match lookup("SHOPSCOUT_MIN_RATING") {
            Some(raw) => raw.parse().map_err(|_| {
                ScrapeError::ConfigError(format!("SHOPSCOUT_MIN_RATING is not a number: {raw}"))
            })?,
            None => MIN_RATING,
        };

        Ok(Self {
            spreadsheet_id,
            range: lookup("SHOPSCOUT_RANGE").unwrap_or_else(|| DEFAULT_RANGE.to_string()),
            query: lookup("SHOPSCOUT_QUERY").unwrap_or_else(|| DEFAULT_QUERY.to_string()),
            credentials_path: lookup("SHOPSCOUT_CREDENTIALS")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("credentials.json")),
            token_path: lookup("SHOPSCOUT_TOKEN")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("token.json")),
            min_rating,
        })
    }
}
