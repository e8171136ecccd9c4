use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::GroqError;
use crate::types::{ChatMessage, CompletionRequest, CompletionResponse};

/// Groq's OpenAI-compatible API root.
pub const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// Model used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Builder for [`GroqClient`].
///
/// # Example
/// ```rust,no_run
/// # async fn run() -> Result<(), mydoc_groq::GroqError> {
/// use mydoc_groq::{ChatMessage, GroqClient, DEFAULT_MODEL};
/// let client = GroqClient::builder("gsk_...").build()?;
/// let reply = client
///     .complete(DEFAULT_MODEL, &[ChatMessage::user("hello")])
///     .await?;
/// # Ok(()) }
/// ```
pub struct GroqClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Option<Duration>,
}

impl GroqClientBuilder {
    /// Override the API root (default: [`DEFAULT_BASE_URL`]).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Apply a total request timeout. Without one the reqwest defaults apply.
    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<GroqClient, GroqError> {
        if self.api_key.is_empty() {
            return Err(GroqError::Config("API key is empty".into()));
        }

        let mut builder = Client::builder()
            .user_agent(concat!("mydoc-groq/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GroqError::Config(format!("failed to build HTTP client: {e}")))?;

        let endpoint = format!("{}/chat/completions", self.base_url.trim_end_matches('/'));

        Ok(GroqClient { http, api_key: self.api_key, endpoint })
    }
}

/// Thin client for `POST /chat/completions`.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GroqClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl std::fmt::Debug for GroqClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqClient")
            .field("endpoint", &self.endpoint)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl GroqClient {
    pub fn builder(api_key: impl Into<String>) -> GroqClientBuilder {
        GroqClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
        }
    }

    /// Full URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one completion request and return the first choice's content.
    ///
    /// Makes exactly one attempt.
    pub async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<String, GroqError> {
        debug!(model, messages = messages.len(), "sending completion request");

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&CompletionRequest { model, messages })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(GroqError::Api { status: status.as_u16(), body });
        }

        let parsed: CompletionResponse = serde_json::from_str(&body)?;
        let content = parsed.first_content().ok_or(GroqError::EmptyResponse)?;

        debug!(model, output_len = content.len(), "completion received");
        Ok(content)
    }
}
