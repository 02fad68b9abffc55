//! Shared HTTP plumbing for every Steam source.
//!
//! All sources share one `reqwest` client with a fixed timeout. A timeout
//! or transport failure becomes a [`SteamError`] that the chain treats as
//! "no data" for that source.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::SteamError;

pub const API_BASE_URL: &str = "https://api.steampowered.com";
pub const COMMUNITY_BASE_URL: &str = "https://steamcommunity.com";

/// Per-request timeout applied to every Steam call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Raw response: status plus body text.
#[derive(Debug)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    /// Fails with [`SteamError::HttpStatus`] unless the status is 2xx.
    pub fn into_success_body(self, provider: &str) -> Result<String, SteamError> {
        if !self.status.is_success() {
            return Err(SteamError::HttpStatus {
                provider: provider.to_string(),
                status: self.status.as_u16(),
            });
        }
        Ok(self.body)
    }
}

/// Cheaply cloneable HTTP handle with configurable base URLs.
#[derive(Clone, Debug)]
pub struct SteamHttp {
    client: Client,
    api_base: String,
    community_base: String,
}

impl Default for SteamHttp {
    fn default() -> Self {
        Self::new()
    }
}

impl SteamHttp {
    pub fn new() -> Self {
        Self::with_base_urls(API_BASE_URL, COMMUNITY_BASE_URL)
    }

    /// Points the handle at alternate hosts (used for local mirrors and tests).
    pub fn with_base_urls(api_base: impl Into<String>, community_base: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            api_base: api_base.into().trim_end_matches('/').to_string(),
            community_base: community_base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    pub fn community_url(&self, path: &str) -> String {
        format!("{}{}", self.community_base, path)
    }

    /// GET `url` with query parameters and return status plus body.
    ///
    /// Non-2xx statuses are returned, not raised: some endpoints put the
    /// interesting part (the privacy marker) in an error body.
    pub async fn get(
        &self,
        provider: &str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<RawResponse, SteamError> {
        debug!("{} request: {} with {} params", provider, url, params.len());

        let response = self
            .client
            .get(url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SteamError::Timeout {
                        provider: provider.to_string(),
                    }
                } else {
                    SteamError::RequestFailed {
                        provider: provider.to_string(),
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                SteamError::Timeout {
                    provider: provider.to_string(),
                }
            } else {
                SteamError::RequestFailed {
                    provider: provider.to_string(),
                    message: format!("Failed to read response: {}", e),
                }
            }
        })?;

        debug!("{} response: HTTP {} ({} bytes)", provider, status, body.len());

        Ok(RawResponse { status, body })
    }

    /// GET that only accepts 2xx responses.
    pub async fn get_ok(
        &self,
        provider: &str,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<String, SteamError> {
        self.get(provider, url, params)
            .await?
            .into_success_body(provider)
    }
}
