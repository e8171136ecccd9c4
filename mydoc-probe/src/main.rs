//! mydoc-probe - one-shot connectivity check against the Groq API.
//!
//! Reads `GROQ_API_KEY`, sends a single fixed completion request and prints
//! what came back. Not used by the server; run it by hand when the chat
//! endpoint starts failing.

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use mydoc_groq::{
    ChatMessage, GroqClient, GroqError, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_MODEL,
};
use tokio::runtime::Runtime;

const TEST_PROMPT: &str = "Reply with 'Groq API is working!' if you see this.";
const RULE: &str = "----------------------------------------";

#[derive(Debug, Parser)]
#[command(name = "mydoc-probe", version, about = "Check that the Groq API is reachable")]
struct Args {
    /// Model to send the test request to.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API root of the OpenAI-compatible endpoint.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

/// How a check ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    /// The API answered with a completion.
    Reachable,
    /// No credential, so nothing was sent.
    MissingKey,
    /// The client could not be built or the request failed.
    Failed,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Reachable => ExitCode::SUCCESS,
            Outcome::MissingKey | Outcome::Failed => ExitCode::FAILURE,
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let rt = Runtime::new()?;
    let outcome = rt.block_on(run(&args, mydoc_groq::api_key_from_env()));
    Ok(outcome.into())
}

/// Send one fixed completion request and report what came back on stdout.
async fn run(args: &Args, api_key: Option<String>) -> Outcome {
    println!("--- Groq API Verification Script ---");

    let Some(api_key) = api_key else {
        println!("❌ Error: {API_KEY_ENV} not found in environment variables.");
        return Outcome::MissingKey;
    };

    println!("✅ Found API Key: {}", mask_key(&api_key));

    let client = match GroqClient::builder(api_key)
        .base_url(args.base_url.as_str())
        .build()
    {
        Ok(client) => client,
        Err(e) => return report_failure(&e),
    };

    println!(
        "Reticulating splines... (Sending test request to '{}')",
        args.model
    );

    match client
        .complete(&args.model, &[ChatMessage::user(TEST_PROMPT)])
        .await
    {
        Ok(reply) => {
            println!();
            println!("✅ SUCCESS! Received response from Groq:");
            println!("{RULE}");
            println!("{reply}");
            println!("{RULE}");
            Outcome::Reachable
        }
        Err(e) => report_failure(&e),
    }
}

fn report_failure(e: &GroqError) -> Outcome {
    println!();
    println!("❌ FAILED! Could not connect to Groq API.");
    println!("Error details: {}", e.detail());
    Outcome::Failed
}

/// First 8 and last 4 characters, or all stars when the key is too short
/// for that to hide anything.
fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() < 12 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::Method::POST;
    use httpmock::MockServer;
    use serde_json::json;

    fn args_for(server: &MockServer) -> Args {
        Args::parse_from(["mydoc-probe", "--base-url", &server.base_url()])
    }

    #[test]
    fn masks_long_keys() {
        assert_eq!(mask_key("gsk_abcdefghijklmnopWXYZ"), "gsk_abcd...WXYZ");
    }

    #[test]
    fn fully_masks_short_keys() {
        assert_eq!(mask_key("short"), "*****");
        assert_eq!(mask_key(""), "");
    }

    #[test]
    fn defaults_match_server() {
        let args = Args::parse_from(["mydoc-probe"]);
        assert_eq!(args.model, DEFAULT_MODEL);
        assert_eq!(args.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "mydoc-probe",
            "--model",
            "llama-3.1-8b-instant",
            "--base-url",
            "http://localhost:8080/v1",
        ]);
        assert_eq!(args.model, "llama-3.1-8b-instant");
        assert_eq!(args.base_url, "http://localhost:8080/v1");
    }

    #[tokio::test]
    async fn reply_from_api_is_reachable() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("authorization", "Bearer gsk_test_key_123456")
                    .json_body(json!({
                        "model": DEFAULT_MODEL,
                        "messages": [{"role": "user", "content": TEST_PROMPT}]
                    }));
                then.status(200).json_body(json!({
                    "choices": [{
                        "index": 0,
                        "message": {"role": "assistant", "content": "Groq API is working!"},
                        "finish_reason": "stop"
                    }]
                }));
            })
            .await;

        let outcome = run(&args_for(&server), Some("gsk_test_key_123456".into())).await;

        assert_eq!(outcome, Outcome::Reachable);
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn rejected_key_is_failure() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(401)
                    .json_body(json!({"error": {"message": "Invalid API Key"}}));
            })
            .await;

        let outcome = run(&args_for(&server), Some("gsk_revoked_key_0000".into())).await;

        assert_eq!(outcome, Outcome::Failed);
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn missing_key_sends_nothing() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(200);
            })
            .await;

        let outcome = run(&args_for(&server), None).await;

        assert_eq!(outcome, Outcome::MissingKey);
        mock.assert_calls(0);
    }
}
