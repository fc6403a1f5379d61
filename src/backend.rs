use crate::config::AppConfig;
use crate::models::{ChannelInsights, VideoInsights};
use crate::reference::VideoId;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered {0}")]
    Status(StatusCode),
    #[error("backend sent an unexpected body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The analytics service that does the actual channel and video analysis.
#[async_trait]
pub trait LookupBackend: Send + Sync {
    async fn video(&self, id: &VideoId) -> Result<VideoInsights, LookupError>;

    async fn channel(&self, input: &str) -> Result<ChannelInsights, LookupError>;
}

pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(config.backend_timeout).build()?;
        Ok(Self {
            client,
            base_url: config.backend_url.clone(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, LookupError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status));
        }
        let body = response.bytes().await?;
        debug!(bytes = body.len(), "backend response received");
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl LookupBackend for HttpBackend {
    async fn video(&self, id: &VideoId) -> Result<VideoInsights, LookupError> {
        let url = format!("{}/video/{}", self.base_url, id);
        self.get_json(self.client.get(url)).await
    }

    async fn channel(&self, input: &str) -> Result<ChannelInsights, LookupError> {
        let url = format!("{}/channel/lookup", self.base_url);
        self.get_json(self.client.get(url).query(&[("channel_input", input)]))
            .await
    }
}
