//! HTTP backend: one GET per command against the configured base URL.

use crate::{ApiError, CommandExecutor, RemoteCommand, Result};
use async_trait::async_trait;

pub struct HttpExecutor {
    base_url: String,
    client: reqwest::Client,
}

impl HttpExecutor {
    /// `base_url` must be an absolute http(s) URL. A trailing `/` is added when missing so
    /// command paths can be appended directly.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let mut base_url = base_url.into();
        let parsed =
            reqwest::Url::parse(&base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.clone()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url));
        }
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;
        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, command: RemoteCommand) -> String {
        format!("{}{}", self.base_url, command.path())
    }
}

#[async_trait]
impl CommandExecutor for HttpExecutor {
    async fn call(&self, command: RemoteCommand) -> Result<u16> {
        let url = self.url_for(command);
        tracing::debug!(%url, "invoking remote api");
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport {
                path: command.path(),
                reason: e.to_string(),
            })?;
        Ok(resp.status().as_u16())
    }
}
