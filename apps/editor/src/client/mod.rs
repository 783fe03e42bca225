/// Client for the profile storage API.
///
/// Two endpoints: `GET /api/profile` to load the stored profile and
/// `POST /api/profile` to replace it. Every call is a single attempt; the
/// editor surfaces failures to the user instead of retrying.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::EditorConfig;
use crate::models::Profile;

const PROFILE_PATH: &str = "/api/profile";

/// Transport-level failure: the request never produced a readable answer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct LoadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    profile: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct SaveRequest<'a> {
    profile: &'a Profile,
}

/// Application-level answer to a save.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SaveResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Remote storage used by `ProfileEditor`. Swap implementations without
/// touching the editor (tests use in-memory stubs).
#[async_trait]
pub trait ProfileApi: Send + Sync {
    /// `Ok(None)` when the server holds no profile or reports `success: false`.
    async fn fetch_profile(&self) -> Result<Option<Profile>, ClientError>;

    async fn store_profile(&self, profile: &Profile) -> Result<SaveResponse, ClientError>;
}

#[derive(Clone)]
pub struct HttpProfileApi {
    client: Client,
    endpoint: String,
}

impl HttpProfileApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            endpoint: format!("{}{}", base_url.trim_end_matches('/'), PROFILE_PATH),
        })
    }

    pub fn from_config(config: &EditorConfig) -> Result<Self, ClientError> {
        Self::new(&config.api_url, config.request_timeout)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ProfileApi for HttpProfileApi {
    async fn fetch_profile(&self) -> Result<Option<Profile>, ClientError> {
        let body = self.client.get(&self.endpoint).send().await?.text().await?;
        let response: LoadResponse = serde_json::from_str(&body)?;

        match response.profile {
            Some(profile) if response.success && !profile.is_null() => {
                Ok(Some(serde_json::from_value(profile)?))
            }
            _ => {
                debug!("Profile API returned no stored profile");
                Ok(None)
            }
        }
    }

    async fn store_profile(&self, profile: &Profile) -> Result<SaveResponse, ClientError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&SaveRequest { profile })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        // Rejections arrive as 4xx/5xx with a `{success: false, error}` body;
        // only a body that cannot be decoded counts as a transport failure.
        let parsed: SaveResponse = serde_json::from_str(&body).map_err(|e| {
            warn!("Profile API returned {status} with undecodable body: {body}");
            ClientError::Decode(e)
        })?;

        if !parsed.success {
            warn!(
                "Profile API rejected save ({status}): {}",
                parsed.error.as_deref().unwrap_or("no detail")
            );
        }

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_strips_trailing_slash() {
        let api = HttpProfileApi::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(api.endpoint(), "http://localhost:8080/api/profile");
    }

    #[test]
    fn test_save_request_wraps_profile() {
        let profile = Profile::default();
        let value = serde_json::to_value(SaveRequest { profile: &profile }).unwrap();
        assert!(value["profile"]["personal_info"].is_object());
        assert!(value["profile"]["skills"]["Soft Skills"].is_array());
    }

    #[test]
    fn test_save_response_defaults_to_failure() {
        let parsed: SaveResponse = serde_json::from_str("{}").unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error, None);

        let parsed: SaveResponse =
            serde_json::from_str(r#"{"success": false, "error": "dup"}"#).unwrap();
        assert_eq!(parsed.error.as_deref(), Some("dup"));
    }

    #[test]
    fn test_load_response_tolerates_missing_profile() {
        let parsed: LoadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(parsed.success);
        assert!(parsed.profile.is_none());
    }
}
