use log::info;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::core::pipeline;
use crate::core::{Record, ScrapeError, ScrapeResult};

const SHEETS_BASE: &str = "https://sheets.googleapis.com";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ValueRange<'a> {
    range: &'a str,
    major_dimension: &'a str,
    values: &'a [Vec<String>],
}

/// What the values update actually changed, straight from the API response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResponse {
    #[serde(default)]
    pub updated_range: Option<String>,
    #[serde(default)]
    pub updated_rows: Option<u32>,
    #[serde(default)]
    pub updated_columns: Option<u32>,
    #[serde(default)]
    pub updated_cells: Option<u32>,
}

/// Thin Google Sheets values client. One spreadsheet per instance.
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: Url,
    spreadsheet_id: String,
}

impl SheetsClient {
    pub fn new(spreadsheet_id: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: Url::parse(SHEETS_BASE).unwrap(),
            spreadsheet_id: spreadsheet_id.into(),
        }
    }

    /// Redirects API calls, for tests against a local mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// `spreadsheets.values.update` with RAW input. Returns the update
    /// summary so the caller can decide what a failure means.
    pub async fn update_values(
        &self,
        token: &str,
        range: &str,
        values: &[Vec<String>],
    ) -> ScrapeResult<UpdateResponse> {
        let url = self.base_url.join(&format!(
            "v4/spreadsheets/{}/values/{}",
            self.spreadsheet_id, range
        ))?;

        let response = self
            .http
            .put(url)
            .bearer_auth(token)
            .query(&[("valueInputOption", "RAW")])
            .json(&ValueRange {
                range,
                major_dimension: "ROWS",
                values,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::SheetsError(format!(
                "values update returned {status}: {body}"
            )));
        }

        Ok(response.json().await?)
    }

    /// Writes the report: header row plus one row per record, raw strings.
    pub async fn write_report(
        &self,
        token: &str,
        range: &str,
        records: Vec<Record>,
    ) -> ScrapeResult<UpdateResponse> {
        let rows = pipeline::build_rows(records);
        let response = self.update_values(token, range, &rows).await?;
        info!("{} cells updated", response.updated_cells.unwrap_or(0));
        Ok(response)
    }
}
