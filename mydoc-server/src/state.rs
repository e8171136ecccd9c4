//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use mydoc_groq::GroqClient;
use tracing::{info, warn};

use crate::config::Config;
use crate::provider::{ChatProvider, GroqProvider};

/// State shared across all HTTP handlers. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Completion provider; `None` when no credential was configured.
    pub provider: Option<Arc<dyn ChatProvider>>,
}

impl AppState {
    /// Build the state for `cfg`, constructing the Groq provider when a
    /// credential is present.
    pub fn from_config(cfg: Config) -> anyhow::Result<Self> {
        let provider: Option<Arc<dyn ChatProvider>> = match cfg.groq_api_key.as_deref() {
            Some(key) => {
                let client = GroqClient::builder(key)
                    .base_url(cfg.groq_base_url.as_str())
                    .timeout(cfg.upstream_timeout)
                    .build()?;
                info!(endpoint = client.endpoint(), model = %cfg.model, "completion provider ready");
                Some(Arc::new(GroqProvider::new(client, cfg.model.as_str())))
            }
            None => {
                warn!(
                    "GROQ_API_KEY is not set; /api/chat will answer every request \
                     with a configuration error"
                );
                None
            }
        };

        Ok(Self { config: Arc::new(cfg), provider })
    }

    pub fn provider_configured(&self) -> bool {
        self.provider.is_some()
    }
}

#[cfg(test)]
impl AppState {
    /// State with an explicit provider and default config.
    pub(crate) fn with_provider(provider: Option<Arc<dyn ChatProvider>>) -> Self {
        Self { config: Arc::new(Config::default()), provider }
    }
}
