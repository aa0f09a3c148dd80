use async_trait::async_trait;
use headless_chrome::{Browser, LaunchOptionsBuilder};
use log::{debug, info};
use std::ffi::OsStr;
use tokio::task::spawn_blocking;
use url::Url;

use super::Fetcher;
use crate::core::{ScrapeError, ScrapeResult};

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headless-Chrome page fetcher. Each `fetch` launches its own browser so
/// concurrent fetches never share a session.
#[derive(Clone)]
pub struct ChromeFetcher {
    user_agent: String,
    extra_args: Vec<String>,
}

impl Default for ChromeFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeFetcher {
    pub fn new() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            extra_args: vec!["--disable-gpu".to_string(), "--no-sandbox".to_string()],
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = user_agent.to_string();
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.extra_args = args;
        self
    }

    fn fetch_blocking(url: Url, user_agent: String, extra_args: Vec<String>) -> ScrapeResult<String> {
        let ua_arg = format!("--user-agent={user_agent}");
        let mut args: Vec<&OsStr> = vec![OsStr::new(&ua_arg)];
        args.extend(extra_args.iter().map(OsStr::new));

        let options = LaunchOptionsBuilder::default()
            .headless(true)
            .args(args)
            .build()
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;

        let browser = Browser::new(options).map_err(|e| ScrapeError::BrowserError(e.to_string()))?;
        let tab = browser
            .new_tab()
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;

        tab.navigate_to(url.as_str())
            .and_then(|t| t.wait_until_navigated())
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;

        let body = tab
            .get_content()
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?;
        debug!("Rendered {} ({} bytes)", url, body.len());
        Ok(body)
    }
}

#[async_trait]
impl Fetcher for ChromeFetcher {
    async fn fetch(&self, url: Url) -> ScrapeResult<String> {
        info!("Fetching URL: {}", url);
        let user_agent = self.user_agent.clone();
        let extra_args = self.extra_args.clone();
        spawn_blocking(move || Self::fetch_blocking(url, user_agent, extra_args))
            .await
            .map_err(|e| ScrapeError::BrowserError(e.to_string()))?
    }
}
