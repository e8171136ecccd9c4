//! Request / response bodies for the frontend-facing API.

use mydoc_groq::ChatMessage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatRequest {
    /// The new user message.
    pub message: String,
    /// Prior turns, oldest first. Only `user` and `assistant` roles are accepted.
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

/// Response body for `POST /api/chat`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatResponse {
    /// Text generated by the provider.
    pub response: String,
    /// RFC 3339 time at which the response was produced.
    pub timestamp: String,
}

/// Body of `GET /`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"ok"`.
    pub status: String,
    /// Crate version of the running server.
    pub version: String,
    /// Whether a provider credential was configured at startup.
    pub provider_configured: bool,
}

/// Error body of every failed `/api/chat` request, including rejected
/// bodies (400 malformed JSON, 415 wrong content type, 422 wrong shape).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use mydoc_groq::Role;

    #[test]
    fn history_defaults_to_empty() {
        let req: ChatRequest = serde_json::from_str(r#"{"message":"I have a headache"}"#).unwrap();
        assert_eq!(req.message, "I have a headache");
        assert!(req.history.is_empty());
    }

    #[test]
    fn history_entries_parse_in_order() {
        let req: ChatRequest = serde_json::from_str(
            r#"{"message":"and now?","history":[
                {"role":"user","content":"hi"},
                {"role":"assistant","content":"hello"}]}"#,
        )
        .unwrap();
        let roles: Vec<Role> = req.history.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant]);
    }

    #[test]
    fn missing_message_is_rejected() {
        assert!(serde_json::from_str::<ChatRequest>(r#"{"history":[]}"#).is_err());
    }
}
