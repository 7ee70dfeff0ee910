// ============================================================
// Layer 3 — Sentence Domain Types
// ============================================================
// A SentenceRecord is one row of the intermediate table that
// links the two stages:
//
//   filename,sentences,num_tokens,cost
//
// The column is called `sentences` (plural) because the table
// is an exploded list of sentences per filing.

use serde::{Deserialize, Serialize};

/// One sentence of a sampled filing.
///
/// Invariant: `text` has at least four whitespace-delimited
/// words and is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    pub filename: String,

    #[serde(rename = "sentences")]
    pub text: String,

    /// Tokens under the configured encoding
    pub num_tokens: u64,

    /// Estimated input cost in USD
    pub cost: f64,
}

impl SentenceRecord {
    pub fn new(
        filename:   impl Into<String>,
        text:       impl Into<String>,
        num_tokens: u64,
        cost:       f64,
    ) -> Self {
        Self {
            filename: filename.into(),
            text:     text.into(),
            num_tokens,
            cost,
        }
    }
}

/// Token and cost totals for a single filing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingCost {
    pub filename:   String,
    pub num_tokens: u64,
    pub cost:       f64,
}
