// ============================================================
// Layer 5 — LLM Classification Layer
// ============================================================
// All code that talks to the remote chat-completion service.
// No other layer builds prompts or touches HTTP.
//
//   prompt.rs     — the fixed system prompt, the numbered user
//                   message, and the strict JSON response schema
//
//   openai.rs     — blocking reqwest client for an
//                   OpenAI-compatible /chat/completions endpoint
//
//   classifier.rs — LlmSentenceClassifier: one chunk in, one
//                   request out, labels parsed from the reply
//
//   reconcile.rs  — parses the `pairs` array and aligns it with
//                   the chunk's sentences, refusing to align
//                   arrays of different lengths
//
// The ChatClient trait is the seam between request building
// and transport; tests replace the transport with canned
// replies.

pub mod prompt;
pub mod openai;
pub mod classifier;
pub mod reconcile;

use serde::Serialize;

use crate::domain::error::ClassifyError;

/// One message of a chat conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role:    String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self { role: "system".to_string(), content: content.into() }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self { role: "user".to_string(), content: content.into() }
    }
}

/// Body of a chat-completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model:           String,
    pub messages:        Vec<ChatMessage>,
    pub temperature:     f32,
    pub response_format: serde_json::Value,
}

/// Transport for chat-completion requests.
pub trait ChatClient {
    /// Send the request and return the assistant message content.
    fn complete(&self, request: &ChatRequest) -> Result<String, ClassifyError>;
}
