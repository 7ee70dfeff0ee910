// ============================================================
// Layer 3 — Chunk Failure Taxonomy
// ============================================================
// Every way a single classification request can fail.
// A ClassifyError never aborts the run: the chunk that
// produced it is recorded as failed and the next chunk is sent.
// Anything outside a chunk (missing files, encoder load,
// CSV writes) is an anyhow::Error instead and ends the run.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifyError {
    /// Transport failure: connect, timeout, body read
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The service answered with a non-success status
    #[error("service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The model declined to answer
    #[error("model refused the request: {0}")]
    Refusal(String),

    /// The response had no message content to parse
    #[error("response contained no message content")]
    MissingContent,

    /// Content was not JSON, or did not match the schema
    #[error("response did not match the schema: {0}")]
    Json(#[from] serde_json::Error),

    /// The labels cannot be aligned with the sentences
    #[error("expected {expected} annotations, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}
