// ============================================================
// Layer 2 — ClassifyUseCase
// ============================================================
// Orchestrates the classification stage in order:
//
//   Step 1: Read the sentence table          (Layer 6 - infra)
//   Step 2: Group by filing, cut chunks      (Layer 4 - data)
//   Step 3: One request per chunk            (Layer 5 - llm)
//   Step 4: Align labels with sentences      (Layer 5 - llm)
//   Step 5: Write the annotation table       (Layer 6 - infra)
//   Step 6: Optionally save the run report   (Layer 6 - infra)
//
// A chunk that fails (transport error, refusal, malformed or
// misaligned reply) is logged and skipped; the run continues
// with the next chunk. Its sentences are absent from the
// output and listed in the report.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

use crate::data::chunker::{group_by_filename, SentenceChunker, DEFAULT_CHUNK_SIZE};
use crate::domain::{
    annotation::AnnotationRecord,
    sentence::SentenceRecord,
    traits::SentenceClassifier,
};
use crate::infra::{
    csv_store::{self, ANNOTATION_HEADER},
    run_report::RunReportStore,
};
use crate::llm::reconcile::zip_chunk;

// ─── Classify Configuration ──────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyConfig {
    pub input:      String,
    pub output:     String,
    pub chunk_size: usize,
    pub report:     Option<String>,
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            input:      "samples_cleaned.csv".to_string(),
            output:     "forward_looking_df.csv".to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            report:     None,
        }
    }
}

// ─── Run Report ───────────────────────────────────────────────────────────────
/// What happened to one chunk.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChunkOutcome {
    Succeeded {
        filename:    String,
        chunk_index: usize,
        /// Annotation rows written for the chunk
        records:     usize,
    },
    Failed {
        filename:       String,
        chunk_index:    usize,
        sentence_count: usize,
        error:          String,
    },
}

impl ChunkOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, ChunkOutcome::Failed { .. })
    }
}

/// Summary of a classification run.
#[derive(Debug, Clone, Serialize)]
pub struct ClassificationReport {
    pub input:               String,
    pub total_sentences:     usize,
    pub annotated_sentences: usize,
    pub total_chunks:        usize,
    pub outcomes:            Vec<ChunkOutcome>,
}

impl ClassificationReport {
    pub fn failed_chunks(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_failed()).count()
    }
}

// ─── ClassifyUseCase ──────────────────────────────────────────────────────────
pub struct ClassifyUseCase {
    config:     ClassifyConfig,
    classifier: Box<dyn SentenceClassifier>,
}

impl ClassifyUseCase {
    pub fn new(config: ClassifyConfig, classifier: Box<dyn SentenceClassifier>) -> Self {
        Self { config, classifier }
    }

    /// Run the whole stage against the configured files.
    pub fn execute(&self) -> Result<ClassificationReport> {
        let cfg = &self.config;
        ensure!(cfg.chunk_size > 0, "chunk size must be at least 1");

        // ── Step 1: Read the sentence table ──────────────────────────────────
        let rows: Vec<SentenceRecord> = csv_store::read_records(&cfg.input)?;
        tracing::info!("Read {} sentences from '{}'", rows.len(), cfg.input);

        // ── Steps 2-4: Chunk, classify, align ────────────────────────────────
        let (records, mut report) = self.classify_rows(&rows);
        report.input = cfg.input.clone();

        // ── Step 5: Write the annotation table ───────────────────────────────
        csv_store::write_records(&cfg.output, ANNOTATION_HEADER, &records)?;
        tracing::info!(
            "Wrote {} annotated sentences to '{}' ({} of {} chunks failed)",
            records.len(),
            cfg.output,
            report.failed_chunks(),
            report.total_chunks
        );

        // ── Step 6: Run report ───────────────────────────────────────────────
        if let Some(path) = &cfg.report {
            RunReportStore::new(path).save(&report)?;
        }

        Ok(report)
    }

    /// Classify every filing's sentences chunk by chunk.
    /// Filings are visited in ascending file name order.
    pub fn classify_rows(&self, rows: &[SentenceRecord]) -> (Vec<AnnotationRecord>, ClassificationReport) {
        let chunker = SentenceChunker::new(self.config.chunk_size);
        let groups  = group_by_filename(rows);

        let total_chunks: usize = groups.values().map(|s| chunker.num_chunks(s.len())).sum();
        tracing::info!(
            "Classifying {} filings in {} chunks of up to {} sentences",
            groups.len(),
            total_chunks,
            chunker.chunk_size()
        );

        let mut records  = Vec::with_capacity(rows.len());
        let mut outcomes = Vec::with_capacity(total_chunks);

        for (filename, sentences) in &groups {
            for (chunk_index, chunk) in chunker.chunk(sentences).into_iter().enumerate() {
                let result = self
                    .classifier
                    .classify(chunk)
                    .and_then(|annotations| zip_chunk(filename, chunk, annotations));

                match result {
                    Ok(annotated) => {
                        outcomes.push(ChunkOutcome::Succeeded {
                            filename:    filename.clone(),
                            chunk_index,
                            records:     annotated.len(),
                        });
                        records.extend(annotated);
                    }
                    Err(e) => {
                        tracing::warn!("Chunk {} of '{}' failed: {}", chunk_index, filename, e);
                        outcomes.push(ChunkOutcome::Failed {
                            filename:       filename.clone(),
                            chunk_index,
                            sentence_count: chunk.len(),
                            error:          e.to_string(),
                        });
                    }
                }
            }
        }

        let report = ClassificationReport {
            input:               String::new(),
            total_sentences:     rows.len(),
            annotated_sentences: records.len(),
            total_chunks,
            outcomes,
        };
        (records, report)
    }
}
