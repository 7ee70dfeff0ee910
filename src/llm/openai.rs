// ============================================================
// Layer 5 — OpenAI Chat-Completion Client
// ============================================================
// Sends a ChatRequest to `{base_url}/chat/completions` with
// the reqwest blocking client and returns the assistant's
// message content.
//
// Error mapping (each becomes a failed chunk, never a crash):
//   connect / timeout / body read → ClassifyError::Http
//   non-2xx status                → ClassifyError::Status
//   body is not a completion JSON → ClassifyError::Json
//   message.refusal present       → ClassifyError::Refusal
//   no choices / no content       → ClassifyError::MissingContent
//
// One attempt per request; there is no retry or backoff.
//
// Reference: OpenAI Chat Completions API, structured outputs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::error::ClassifyError;
use crate::llm::{ChatClient, ChatRequest};

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Longest error body kept in a ClassifyError::Status.
const MAX_ERROR_BODY: usize = 800;

pub struct OpenAiClient {
    base_url:     String,
    api_key:      String,
    client:       reqwest::blocking::Client,
    timeout_secs: u64,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Cannot build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key:  api_key.into(),
            client,
            timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

/// Response body of /chat/completions, only the fields we read.
#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    refusal: Option<String>,
}

impl ChatClient for OpenAiClient {
    fn complete(&self, request: &ChatRequest) -> Result<String, ClassifyError> {
        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ClassifyError::Http(format!(
                        "request timed out after {}s",
                        self.timeout_secs
                    ))
                } else {
                    ClassifyError::Http(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClassifyError::Status {
                status: status.as_u16(),
                body:   body.chars().take(MAX_ERROR_BODY).collect(),
            });
        }

        let text = response
            .text()
            .map_err(|e| ClassifyError::Http(format!("cannot read response body: {e}")))?;
        let parsed: ChatCompletionResponse = serde_json::from_str(&text)?;

        let message = parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or(ClassifyError::MissingContent)?;

        if let Some(refusal) = message.refusal.filter(|r| !r.is_empty()) {
            return Err(ClassifyError::Refusal(refusal));
        }

        message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(ClassifyError::MissingContent)
    }
}
