//! mydoc-groq - client for Groq's OpenAI-compatible chat completions API.
//!
//! Shared by `mydoc-server` (the chat relay) and `mydoc-probe` (the
//! connectivity check).

pub mod client;
pub mod error;
pub mod types;

pub use client::{GroqClient, GroqClientBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use error::GroqError;
pub use types::{ChatMessage, Role};

/// Environment variable holding the provider credential.
pub const API_KEY_ENV: &str = "GROQ_API_KEY";

/// Read the credential from the environment. Empty values count as absent.
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .map(|k| k.trim().to_owned())
        .filter(|k| !k.is_empty())
}
