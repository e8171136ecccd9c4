//! Completion provider seam.
//!
//! Handlers never see the HTTP client directly: they receive an
//! `Arc<dyn ChatProvider>` through [`crate::state::AppState`], built once at
//! startup. Tests swap in a recording fake.

use async_trait::async_trait;
use mydoc_groq::{ChatMessage, GroqClient, GroqError};

/// Something that turns an ordered message list into generated text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// One attempt, no retries.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GroqError>;
}

/// [`ChatProvider`] backed by the Groq completions API.
pub struct GroqProvider {
    client: GroqClient,
    model: String,
}

impl GroqProvider {
    pub fn new(client: GroqClient, model: impl Into<String>) -> Self {
        Self { client, model: model.into() }
    }
}

#[async_trait]
impl ChatProvider for GroqProvider {
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, GroqError> {
        self.client.complete(&self.model, messages).await
    }
}
