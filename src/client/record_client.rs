//! HTTP client for the record service

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::client::ClientError;
use crate::config::Config;
use crate::models::{Endpoint, Identifier};

/// Anything that can answer record service requests.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Perform one GET against `endpoint` and decode its JSON body.
    async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Value, ClientError>;

    async fn first(&self) -> Result<Value, ClientError> {
        self.request(Endpoint::First, &[]).await
    }

    async fn next(&self, last_id: &Identifier) -> Result<Value, ClientError> {
        self.request(Endpoint::Next, &[("last_id", last_id.to_string())])
            .await
    }

    async fn prev(&self, last_id: &Identifier) -> Result<Value, ClientError> {
        self.request(Endpoint::Prev, &[("last_id", last_id.to_string())])
            .await
    }

    async fn detail_rows(&self, mah_idd: &str) -> Result<Value, ClientError> {
        self.request(Endpoint::MahalLine, &[("mah_idd", mah_idd.to_string())])
            .await
    }
}

/// reqwest-backed record service client. One attempt per call, no retries.
pub struct RecordClient {
    client: Client,
    base_url: String,
}

impl RecordClient {
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let base_url = config.base_url().to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(config.server_url.clone()))?;

        let client = Client::builder()
            .user_agent(&config.http.user_agent)
            .timeout(config.http_timeout())
            .build()
            .map_err(ClientError::Setup)?;

        info!(
            "Record client ready for {} (timeout {} ms)",
            base_url, config.http.timeout_ms
        );

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.as_str())
    }
}

#[async_trait]
impl RecordSource for RecordClient {
    async fn request(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<Value, ClientError> {
        let url = self.endpoint_url(endpoint);
        debug!("GET {} {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| {
                warn!("Request to {} failed: {}", url, e);
                ClientError::Transport(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!("{} answered with status {}", url, status);
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await.map_err(ClientError::Transport)?;
        let value = serde_json::from_str(&body).map_err(|e| {
            warn!("Response from {} is not JSON: {}", url, e);
            ClientError::Decode(e)
        })?;

        Ok(value)
    }
}
