// ============================================================
// Layer 6 — Cost Report
// ============================================================
// Aggregates the per-sentence token counts of a prepared
// sample into per-filing and overall totals.
//
// The totals answer "what will classifying this sample cost?"
// before any request is sent. They are logged at the end of
// `prepare` and can be written to a CSV for later analysis:
//
//   filename,num_tokens,cost
//   0000950123-19-001234.txt,18234,0.045585
//   ...
//
// Filings are listed in ascending file name order.

use anyhow::Result;
use serde::Serialize;
use std::{collections::BTreeMap, path::Path};

use crate::domain::sentence::{FilingCost, SentenceRecord};
use crate::infra::csv_store::{self, FILING_COST_HEADER};

/// Token and cost totals for a prepared sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    /// One entry per filing that kept at least one sentence
    pub filings: Vec<FilingCost>,

    /// Number of sentence rows
    pub sentence_count: usize,

    /// Sum of `num_tokens` over all sentences
    pub total_tokens: u64,

    /// Sum of `cost` over all sentences, in USD
    pub total_cost: f64,
}

impl CostSummary {
    /// Build the totals from the sentence table.
    pub fn from_sentences(rows: &[SentenceRecord]) -> Self {
        let mut per_filing: BTreeMap<&str, (u64, f64)> = BTreeMap::new();
        for row in rows {
            let entry = per_filing.entry(row.filename.as_str()).or_insert((0, 0.0));
            entry.0 += row.num_tokens;
            entry.1 += row.cost;
        }

        let filings: Vec<FilingCost> = per_filing
            .into_iter()
            .map(|(filename, (num_tokens, cost))| FilingCost {
                filename: filename.to_string(),
                num_tokens,
                cost,
            })
            .collect();

        Self {
            total_tokens:   filings.iter().map(|f| f.num_tokens).sum(),
            total_cost:     filings.iter().map(|f| f.cost).sum(),
            sentence_count: rows.len(),
            filings,
        }
    }

    /// Mean tokens per filing, 0 for an empty sample.
    pub fn mean_tokens_per_filing(&self) -> f64 {
        if self.filings.is_empty() {
            return 0.0;
        }
        self.total_tokens as f64 / self.filings.len() as f64
    }

    /// Log the totals at info level.
    pub fn log(&self) {
        tracing::info!(
            "Sample: {} sentences across {} filings, {} tokens, estimated cost ${:.4}",
            self.sentence_count,
            self.filings.len(),
            self.total_tokens,
            self.total_cost,
        );
        tracing::debug!(
            "Mean tokens per filing: {:.1}",
            self.mean_tokens_per_filing()
        );
    }

    /// Write the per-filing totals as CSV.
    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        csv_store::write_records(path, FILING_COST_HEADER, &self.filings)?;
        tracing::info!("Wrote cost report for {} filings to '{}'", self.filings.len(), path.display());
        Ok(())
    }
}
