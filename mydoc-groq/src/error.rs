use thiserror::Error;

/// Errors that can be returned while talking to the completions API.
#[derive(Debug, Error)]
pub enum GroqError {
    /// The HTTP request itself failed (connect, TLS, timeout, body read).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("provider returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the JSON shape we expect.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response parsed, but held no choice or no message content.
    #[error("provider response contained no message content")]
    EmptyResponse,

    /// The client could not be built from the supplied settings.
    #[error("invalid client configuration: {0}")]
    Config(String),
}

impl GroqError {
    /// Display text followed by every `source()` in the chain.
    ///
    /// reqwest's Display stops at "error sending request for url (...)";
    /// the refused connection, DNS or TLS failure only shows up further down.
    pub fn detail(&self) -> String {
        error_chain(self)
    }
}

/// `err` and its causes joined by `": "`, skipping causes whose text is
/// already part of the output.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}
