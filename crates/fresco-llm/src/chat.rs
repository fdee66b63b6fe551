//! Chat-completions provider implementation
//!
//! Integrates with any OpenAI-compatible `/chat/completions` endpoint
//! (hosted inference services, local gateways).
//!
//! # Features
//!
//! - Async HTTP communication
//! - Configurable endpoint, model, and API key
//! - Retry logic with linear backoff
//! - Timeout handling
//!
//! # Examples
//!
//! ```no_run
//! use fresco_llm::ChatProvider;
//!
//! let provider = ChatProvider::new(
//!     "https://api-inference.modelscope.cn/v1",
//!     "Qwen/Qwen3-235B-A22B-Instruct-2507",
//!     std::env::var("MODEL_API_KEY").unwrap_or_default(),
//! );
//! // provider.generate(...) is async; the LlmProvider impl wraps it for
//! // blocking call sites.
//! ```

use crate::LlmError;
use fresco_domain::LlmProvider as LlmProviderTrait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::warn;

/// Default timeout for a single request (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// OpenAI-compatible chat-completions provider
pub struct ChatProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl ChatProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL, without the `/chat/completions` suffix
    /// - `model`: model identifier
    /// - `api_key`: bearer token for the service
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("default reqwest client");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Set the maximum number of attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate a completion
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, the model is
    /// unknown, the rate limit holds across all retries, or the response
    /// body has no message content.
    pub async fn generate(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let url = format!("{}/chat/completions", self.endpoint);

        let request_body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: prompt.to_string(),
                },
            ],
            stream: false,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        match response.json::<ChatResponse>().await {
                            Ok(chat_response) => {
                                return chat_response
                                    .choices
                                    .into_iter()
                                    .next()
                                    .map(|choice| choice.message.content)
                                    .ok_or_else(|| {
                                        LlmError::InvalidResponse(
                                            "Response contained no choices".to_string(),
                                        )
                                    });
                            }
                            Err(e) => {
                                return Err(LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Linear backoff: 2s, 4s, 6s, ...
                let delay = Duration::from_secs(2 * u64::from(attempts));
                warn!("Chat completion attempt {} failed, retrying in {:?}", attempts, delay);
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for ChatProvider {
    type Error = LlmError;

    fn generate(&self, system: &str, prompt: &str) -> Result<String, Self::Error> {
        // Blocking wrapper for async call sites that hold no runtime
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.generate(system, prompt).await })
    }
}
