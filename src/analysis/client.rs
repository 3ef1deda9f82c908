//! Remote sentiment service client

use super::errors::AnalysisError;
use super::result::AnalysisResult;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Anything that can turn text into an [`AnalysisResult`]
#[async_trait]
pub trait SentimentService: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError>;
}

#[derive(Serialize)]
struct AnalyzeRequest<'a> {
    text: &'a str,
}

/// JSON-over-HTTP sentiment service. One attempt per call, no retries.
pub struct HttpSentimentClient {
    client: Client,
    endpoint: String,
}

impl HttpSentimentClient {
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> Result<Self, AnalysisError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    /// Use an already configured reqwest client
    pub fn with_client(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl SentimentService for HttpSentimentClient {
    async fn analyze(&self, text: &str) -> Result<AnalysisResult, AnalysisError> {
        debug!(chars = text.chars().count(), "POST {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&AnalyzeRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("analysis service returned {}", status);
            return Err(AnalysisError::Status(status));
        }

        let body = response.text().await?;
        debug!("analysis response: {}", body);
        let result: AnalysisResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}
