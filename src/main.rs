use log::{error, info};

use shopscout::core::pipeline;
use shopscout::sources::{Amazon, Rakuten};
use shopscout::{scrape_source, Authenticator, ChromeFetcher, Config, ScrapeResult, SheetsClient};

#[tokio::main]
async fn main() -> ScrapeResult<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .filter_module("selectors", log::LevelFilter::Warn)
        .filter_module("html5ever", log::LevelFilter::Error)
        .init();

    let config = Config::from_env()?;
    let fetcher = ChromeFetcher::new();
    let rakuten_source = Rakuten::new();
    let amazon_source = Amazon::new();

    // The two sources carry no data dependency, so they render in parallel.
    // Merge order does not matter downstream.
    let (rakuten, amazon) = tokio::try_join!(
        scrape_source(&fetcher, &rakuten_source, &config.query),
        scrape_source(&fetcher, &amazon_source, &config.query),
    )?;

    let mut records = rakuten;
    records.extend(amazon);

    let report = pipeline::run(records, config.min_rating);

    // Authorization is the one step allowed to fail the whole run.
    let mut auth = Authenticator::from_files(&config.credentials_path, &config.token_path)?;
    auth.authorize().await?;
    let token = auth.access_token().await?;

    let client = SheetsClient::new(config.spreadsheet_id);
    match client.write_report(&token, &config.range, report).await {
        Ok(response) => info!(
            "Report written to {}",
            response.updated_range.as_deref().unwrap_or(config.range.as_str())
        ),
        // A failed write is logged, not fatal; the run still completes.
        Err(e) => error!("Spreadsheet write failed: {e}"),
    }

    Ok(())
}
