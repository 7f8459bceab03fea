use crate::error::{AuditError, Result};
use crate::types::config::FetchSettings;
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

/// Source of raw page markup.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &Url) -> Result<String>;
}

/// Fetches pages over HTTP(S). One attempt per call; failures are terminal.
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    pub fn new(settings: &FetchSettings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()
            .map_err(|e| AuditError::Fetch {
                url: String::new(),
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            timeout: settings.timeout,
        })
    }

    fn describe(&self, err: &reqwest::Error) -> String {
        if err.is_timeout() {
            format!("timed out after {}s", self.timeout.as_secs())
        } else if err.is_connect() {
            format!("connection failed: {err}")
        } else {
            err.to_string()
        }
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &Url) -> Result<String> {
        tracing::info!(%url, "fetching page");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| AuditError::Fetch {
                url: url.to_string(),
                reason: self.describe(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuditError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(|e| AuditError::Fetch {
            url: url.to_string(),
            reason: self.describe(&e),
        })?;
        tracing::debug!(%url, bytes = body.len(), "page fetched");
        Ok(body)
    }
}

/// Parses and checks a user-supplied page address.
pub fn parse_target(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AuditError::MissingUrl);
    }
    let url = Url::parse(trimmed).map_err(|e| AuditError::InvalidUrl(format!("{trimmed}: {e}")))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(AuditError::InvalidUrl(format!(
            "{trimmed}: unsupported scheme {}",
            url.scheme()
        )));
    }
    Ok(url)
}
