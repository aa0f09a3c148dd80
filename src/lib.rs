pub mod browser;
pub mod config;
pub mod core;
pub mod sheets;
pub mod sources;

pub use browser::{ChromeFetcher, Fetcher};
pub use config::Config;
pub use core::{Record, ScrapeError, ScrapeResult};
pub use sheets::{Authenticator, SheetsClient};
pub use sources::{scrape_source, SourceAdapter};
