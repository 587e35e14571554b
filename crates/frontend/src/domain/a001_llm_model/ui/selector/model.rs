//! LLM Model Selector - Model Layer
//!
//! Source of the model catalog and the errors a fetch can end with

use crate::shared::api_utils::api_url;
use contracts::domain::a001_llm_model::aggregate::Model;
use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Backend path listing the selectable models
pub const MODELS_PATH: &str = "/api/models";

/// Shown when a failure carries no message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// Why the model list could not be loaded
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to fetch models (HTTP {0})")]
    Status(u16),
    #[error("{0}")]
    Transport(String),
    #[error("{0}")]
    Decode(String),
    #[error("Request timed out after {0} ms")]
    Timeout(u32),
}

impl FetchError {
    /// Human-readable message for the error state
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Anything able to produce the list of selectable models
#[allow(async_fn_in_trait)]
pub trait ModelSource {
    async fn list_models(&self) -> Result<Vec<Model>, FetchError>;
}

/// Loads models with a single `GET` request
#[derive(Debug, Clone)]
pub struct HttpModelSource {
    url: String,
    timeout_ms: Option<u32>,
}

impl HttpModelSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_ms: None,
        }
    }

    /// Source pointing at the backend's `/api/models`
    pub fn from_api() -> Self {
        Self::new(api_url(MODELS_PATH))
    }

    /// Give up after `ms` milliseconds. No timeout is applied by default.
    pub fn with_timeout(mut self, ms: u32) -> Self {
        self.timeout_ms = Some(ms);
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn request(&self) -> Result<Vec<Model>, FetchError> {
        let response = Request::get(&self.url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        response
            .json::<Vec<Model>>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

impl ModelSource for HttpModelSource {
    async fn list_models(&self) -> Result<Vec<Model>, FetchError> {
        let Some(ms) = self.timeout_ms else {
            return self.request().await;
        };

        let request = Box::pin(self.request());
        let timeout = Box::pin(TimeoutFuture::new(ms));
        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(_) => Err(FetchError::Timeout(ms)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        assert_eq!(
            FetchError::Status(500).user_message(),
            "Failed to fetch models (HTTP 500)"
        );
        assert_eq!(
            FetchError::Transport("connection refused".into()).user_message(),
            "connection refused"
        );
        assert_eq!(
            FetchError::Transport(String::new()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
        assert_eq!(
            FetchError::Decode("  ".into()).user_message(),
            GENERIC_ERROR_MESSAGE
        );
    }

    #[test]
    fn test_http_source_builder() {
        let source = HttpModelSource::new("http://localhost:3000/api/models").with_timeout(5000);
        assert_eq!(source.url(), "http://localhost:3000/api/models");
        assert_eq!(source.timeout_ms, Some(5000));
        assert_eq!(HttpModelSource::new("x").timeout_ms, None);
    }
}
