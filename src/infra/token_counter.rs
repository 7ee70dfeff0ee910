// ============================================================
// Layer 6 — Token Counting and Cost
// ============================================================
// Estimates what sending each sentence to the LLM will cost.
//
// Two encoders implement the TokenCounter trait:
//
//   TiktokenCounter    — OpenAI BPE encodings via tiktoken-rs.
//                        o200k_base is the gpt-4o family encoding
//                        and the default.
//   HfTokenizerCounter — any HuggingFace tokenizer.json, for
//                        model families without a tiktoken
//                        encoding.
//
// Cost is linear in tokens:
//   cost = tokens × price_per_million / 1_000_000
//
// The default price is 2.5 USD per million input tokens.
//
// Reference: tiktoken-rs and tokenizers crate documentation

use anyhow::{Context, Result};
use std::path::Path;
use tiktoken_rs::CoreBPE;
use tokenizers::Tokenizer;

use crate::domain::traits::TokenCounter;

/// Default tiktoken encoding.
pub const DEFAULT_ENCODING: &str = "o200k_base";

/// Default input price in USD per million tokens.
pub const DEFAULT_COST_PER_MILLION: f64 = 2.5;

// ─── TiktokenCounter ──────────────────────────────────────────────────────────
pub struct TiktokenCounter {
    bpe:      CoreBPE,
    encoding: &'static str,
}

impl TiktokenCounter {
    /// Load a tiktoken encoding by name:
    /// `o200k_base` (gpt-4o), `cl100k_base` (gpt-4, gpt-3.5)
    /// or `p50k_base` (older completion models).
    pub fn by_name(name: &str) -> Result<Self> {
        let (bpe, encoding) = match name {
            "o200k_base"  => (tiktoken_rs::o200k_base(), "o200k_base"),
            "cl100k_base" => (tiktoken_rs::cl100k_base(), "cl100k_base"),
            "p50k_base"   => (tiktoken_rs::p50k_base(), "p50k_base"),
            other => anyhow::bail!("Unknown tiktoken encoding '{other}'"),
        };
        let bpe = bpe.with_context(|| format!("Cannot load {encoding} encoding"))?;
        tracing::info!("Loaded token encoding {}", encoding);
        Ok(Self { bpe, encoding })
    }
}

impl TokenCounter for TiktokenCounter {
    fn count(&self, text: &str) -> Result<usize> {
        Ok(self.bpe.encode_ordinary(text).len())
    }

    fn encoding(&self) -> &str {
        self.encoding
    }
}

// ─── HfTokenizerCounter ───────────────────────────────────────────────────────
pub struct HfTokenizerCounter {
    tokenizer: Tokenizer,
    name:      String,
}

impl HfTokenizerCounter {
    /// Load a tokenizer.json from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let tokenizer = Tokenizer::from_file(path).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", path.display(), e)
        })?;
        tracing::info!("Loaded tokenizer from '{}'", path.display());
        Ok(Self {
            tokenizer,
            name: path.display().to_string(),
        })
    }
}

impl TokenCounter for HfTokenizerCounter {
    fn count(&self, text: &str) -> Result<usize> {
        let enc = self
            .tokenizer
            .encode(text, false)
            .map_err(|e| anyhow::anyhow!("Tokenisation error: {e}"))?;
        Ok(enc.get_ids().len())
    }

    fn encoding(&self) -> &str {
        &self.name
    }
}

// ─── CostModel ────────────────────────────────────────────────────────────────
/// Flat per-token input pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    per_million: f64,
}

impl CostModel {
    pub fn new(per_million: f64) -> Self {
        Self { per_million }
    }

    /// Estimated cost in USD for `tokens` input tokens.
    pub fn cost(&self, tokens: u64) -> f64 {
        tokens as f64 * self.per_million / 1_000_000.0
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self::new(DEFAULT_COST_PER_MILLION)
    }
}
