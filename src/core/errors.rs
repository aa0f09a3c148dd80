use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Browser error: {0}")]
    BrowserError(String),

    #[error("Authorization error: {0}")]
    AuthError(String),

    #[error("Spreadsheet error: {0}")]
    SheetsError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
