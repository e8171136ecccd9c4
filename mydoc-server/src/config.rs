//! Server configuration, loaded from environment variables at startup.

use std::time::Duration;

/// Runtime configuration for mydoc-server.
///
/// Every field has a default so the server starts without any environment
/// variables set. A missing `GROQ_API_KEY` is not fatal; the chat endpoint
/// then reports a configuration error on every call.
#[derive(Clone)]
pub struct Config {
    /// TCP address to bind (default: `"0.0.0.0:8000"`).
    pub bind_address: String,

    /// Provider credential from `GROQ_API_KEY`. Empty values are treated as unset.
    pub groq_api_key: Option<String>,

    /// Completions API root (default: Groq's OpenAI-compatible endpoint).
    pub groq_base_url: String,

    /// Model identifier sent with every completion request.
    pub model: String,

    /// Comma-separated list of origins allowed by CORS.
    pub cors_allowed_origins: String,

    /// Optional total timeout for the upstream call. `None` keeps the
    /// HTTP client's defaults.
    pub upstream_timeout: Option<Duration>,

    /// `tracing` filter string, e.g. `"info"` or `"debug,tower_http=warn"`.
    pub log_level: String,

    /// When `true`, emit log records as newline-delimited JSON.
    pub log_json: bool,

    /// Mount Swagger UI and the OpenAPI document.
    pub enable_swagger: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("bind_address", &self.bind_address)
            .field("groq_api_key", &self.groq_api_key.as_ref().map(|_| "<redacted>"))
            .field("groq_base_url", &self.groq_base_url)
            .field("model", &self.model)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("upstream_timeout", &self.upstream_timeout)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("enable_swagger", &self.enable_swagger)
            .finish()
    }
}

impl Config {
    /// Build [`Config`] from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            bind_address: env_or("MYDOC_BIND", "0.0.0.0:8000"),
            groq_api_key: mydoc_groq::api_key_from_env(),
            groq_base_url: env_or("MYDOC_GROQ_BASE_URL", mydoc_groq::DEFAULT_BASE_URL),
            model: env_or("MYDOC_MODEL", mydoc_groq::DEFAULT_MODEL),
            cors_allowed_origins: env_or("MYDOC_CORS_ORIGINS", "http://localhost:5173"),
            upstream_timeout: env_timeout("MYDOC_UPSTREAM_TIMEOUT_SECS"),
            log_level: env_or("MYDOC_LOG", "info"),
            log_json: env_flag("MYDOC_LOG_JSON", false),
            enable_swagger: env_flag("MYDOC_ENABLE_SWAGGER", true),
        }
    }
}

#[cfg(test)]
impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:0".into(),
            groq_api_key: None,
            groq_base_url: mydoc_groq::DEFAULT_BASE_URL.into(),
            model: mydoc_groq::DEFAULT_MODEL.into(),
            cors_allowed_origins: "http://localhost:5173".into(),
            upstream_timeout: None,
            log_level: "info".into(),
            log_json: false,
            enable_swagger: false,
        }
    }
}

// ── private helpers ──────────────────────────────────────────────────────────

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| parse_flag(&v).unwrap_or(default))
        .unwrap_or(default)
}

// Runs before tracing is installed, so problems go to stderr like an
// invalid MYDOC_LOG does in main.
fn env_timeout(key: &str) -> Option<Duration> {
    let raw = std::env::var(key).ok()?;
    match parse_timeout_secs(&raw) {
        Ok(timeout) => timeout,
        Err(e) => {
            eprintln!(
                "WARN: {key}='{raw}' is not a whole number of seconds ({e}); \
                 using the HTTP client's default timeout"
            );
            None
        }
    }
}

/// `0` or an empty value disables the timeout.
fn parse_timeout_secs(value: &str) -> Result<Option<Duration>, std::num::ParseIntError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    let secs: u64 = value.parse()?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "1" => Some(true),
        "0" => Some(false),
        v if v.eq_ignore_ascii_case("true") => Some(true),
        v if v.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" false "), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("yes please"), None);
    }

    #[test]
    fn timeout_parses_seconds() {
        assert_eq!(parse_timeout_secs("30"), Ok(Some(Duration::from_secs(30))));
        assert_eq!(parse_timeout_secs(" 5 "), Ok(Some(Duration::from_secs(5))));
        assert_eq!(parse_timeout_secs("0"), Ok(None));
        assert_eq!(parse_timeout_secs(""), Ok(None));
    }

    #[test]
    fn timeout_rejects_garbage() {
        assert!(parse_timeout_secs("30s").is_err());
        assert!(parse_timeout_secs("-1").is_err());
        assert!(parse_timeout_secs("1.5").is_err());
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = Config {
            groq_api_key: Some("gsk_very_secret".into()),
            ..Config::default()
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("gsk_very_secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
