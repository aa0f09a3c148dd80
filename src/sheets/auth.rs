use chrono::{DateTime, Duration, Utc};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

use crate::core::{ScrapeError, ScrapeResult};

const AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets";

/// `credentials.json` in Google's installed-application format.
#[derive(Debug, Deserialize)]
struct CredentialsFile {
    installed: InstalledApp,
}

#[derive(Debug, Clone, Deserialize)]
struct InstalledApp {
    client_id: String,
    client_secret: String,
    redirect_uris: Vec<String>,
}

/// Token cache persisted to `token.json` between runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredToken {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

impl StoredToken {
    /// Expired, with a minute of slack so a token does not die mid-request.
    fn is_expired(&self) -> bool {
        match self.expiry {
            Some(expiry) => Utc::now() >= expiry - Duration::seconds(60),
            None => false,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Explicit credential provider for the spreadsheet write. Load-or-obtain on
/// `authorize`, bearer tokens via `access_token`; no teardown needed.
pub struct Authenticator {
    http: reqwest::Client,
    app: InstalledApp,
    token_url: String,
    token_path: PathBuf,
    token: Option<StoredToken>,
}

impl Authenticator {
    /// Reads the OAuth client credentials. A missing or malformed
    /// credentials file is fatal; nothing downstream can run without it.
    pub fn from_files(
        credentials_path: impl AsRef<Path>,
        token_path: impl AsRef<Path>,
    ) -> ScrapeResult<Self> {
        let credentials_path = credentials_path.as_ref();
        let raw = fs::read_to_string(credentials_path).map_err(|e| {
            ScrapeError::AuthError(format!(
                "cannot read credentials file {}: {e}",
                credentials_path.display()
            ))
        })?;
        let credentials: CredentialsFile = serde_json::from_str(&raw).map_err(|e| {
            ScrapeError::AuthError(format!(
                "malformed credentials file {}: {e}",
                credentials_path.display()
            ))
        })?;

        Ok(Self {
            http: reqwest::Client::new(),
            app: credentials.installed,
            token_url: TOKEN_URL.to_string(),
            token_path: token_path.as_ref().to_path_buf(),
            token: None,
        })
    }

    /// Points token requests at a different endpoint. Test hook.
    pub fn with_token_url(mut self, token_url: &str) -> Self {
        self.token_url = token_url.to_string();
        self
    }

    fn redirect_uri(&self) -> ScrapeResult<&str> {
        self.app
            .redirect_uris
            .first()
            .map(String::as_str)
            .ok_or_else(|| {
                ScrapeError::AuthError("credentials file lists no redirect URIs".to_string())
            })
    }

    /// Consent URL the user has to visit on first run.
    pub fn consent_url(&self) -> ScrapeResult<String> {
        let mut url = Url::parse(AUTH_URL)?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.app.client_id)
            .append_pair("redirect_uri", self.redirect_uri()?)
            .append_pair("response_type", "code")
            .append_pair("scope", SCOPE)
            .append_pair("access_type", "offline");
        Ok(url.into())
    }

    /// Loads the cached token if one exists, otherwise walks the interactive
    /// code flow and persists the result for the next run.
    pub async fn authorize(&mut self) -> ScrapeResult<()> {
        if self.token_path.exists() {
            let raw = fs::read_to_string(&self.token_path)?;
            let token: StoredToken = serde_json::from_str(&raw).map_err(|e| {
                ScrapeError::AuthError(format!(
                    "malformed token file {}: {e}",
                    self.token_path.display()
                ))
            })?;
            info!("Loaded cached token from {}", self.token_path.display());
            self.token = Some(token);
        } else {
            let code = self.prompt_for_code()?;
            let token = self
                .request_token(&[
                    ("grant_type", "authorization_code"),
                    ("code", &code),
                    ("client_id", &self.app.client_id),
                    ("client_secret", &self.app.client_secret),
                    ("redirect_uri", self.redirect_uri()?),
                ])
                .await?;
            self.store_token(&token)?;
            info!("Token stored to {}", self.token_path.display());
            self.token = Some(token);
        }
        Ok(())
    }

    /// Valid bearer token, refreshed through the stored refresh token when
    /// the cached one has expired.
    pub async fn access_token(&mut self) -> ScrapeResult<String> {
        let expired = match &self.token {
            Some(token) => token.is_expired(),
            None => {
                return Err(ScrapeError::AuthError(
                    "authorize() has not been called".to_string(),
                ))
            }
        };

        if expired {
            self.refresh().await?;
        }

        match &self.token {
            Some(token) => Ok(token.access_token.clone()),
            None => Err(ScrapeError::AuthError("no token available".to_string())),
        }
    }

    async fn refresh(&mut self) -> ScrapeResult<()> {
        let refresh_token = self
            .token
            .as_ref()
            .and_then(|t| t.refresh_token.clone())
            .ok_or_else(|| {
                ScrapeError::AuthError("token expired and no refresh token stored".to_string())
            })?;

        info!("Access token expired, refreshing");
        let mut renewed = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", &refresh_token),
                ("client_id", &self.app.client_id),
                ("client_secret", &self.app.client_secret),
            ])
            .await?;

        // Google omits the refresh token on refresh responses; keep ours.
        if renewed.refresh_token.is_none() {
            renewed.refresh_token = Some(refresh_token);
        }
        self.store_token(&renewed)?;
        self.token = Some(renewed);
        Ok(())
    }

    fn prompt_for_code(&self) -> ScrapeResult<String> {
        println!("Authorize this app by visiting this url: {}", self.consent_url()?);
        println!("Enter the code from that page here:");

        let mut code = String::new();
        std::io::stdin().read_line(&mut code)?;
        let code = code.trim().to_string();
        if code.is_empty() {
            return Err(ScrapeError::AuthError(
                "empty authorization code".to_string(),
            ));
        }
        Ok(code)
    }

    async fn request_token(&self, params: &[(&str, &str)]) -> ScrapeResult<StoredToken> {
        let response = self
            .http
            .post(&self.token_url)
            .form(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ScrapeError::AuthError(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response.json().await?;
        Ok(StoredToken {
            access_token: token.access_token,
            refresh_token: token.refresh_token,
            expiry: token
                .expires_in
                .map(|seconds| Utc::now() + Duration::seconds(seconds)),
        })
    }

    fn store_token(&self, token: &StoredToken) -> ScrapeResult<()> {
        fs::write(&self.token_path, serde_json::to_string(token)?)?;
        Ok(())
    }
}
