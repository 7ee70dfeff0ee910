// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The pipeline talks to its external collaborators only
// through these traits:
//
//   FilingSource       — CsvFilingLoader (data::loader)
//   SentenceSegmenter  — UnicodeSentenceSegmenter (data::segmenter)
//   TokenCounter       — TiktokenCounter, HfTokenizerCounter (infra)
//   SentenceClassifier — LlmSentenceClassifier (llm::classifier)
//
// The use cases receive them already constructed, so tests
// substitute in-memory stubs for the model and the service.

use anyhow::Result;

use crate::domain::annotation::Annotation;
use crate::domain::error::ClassifyError;
use crate::domain::filing::FilingRecord;

// ─── FilingSource ─────────────────────────────────────────────────────────────
/// Any component that can load raw filing records.
pub trait FilingSource {
    /// Load every usable filing. Rows with no MD&A text are not returned.
    fn load_all(&self) -> Result<Vec<FilingRecord>>;
}

// ─── SentenceSegmenter ────────────────────────────────────────────────────────
/// Splits cleaned text into sentences.
pub trait SentenceSegmenter {
    /// Trimmed, non-empty sentences in source order.
    fn segment(&self, text: &str) -> Vec<String>;

    /// Short name of the segmentation model, for logging
    fn name(&self) -> &str;
}

// ─── TokenCounter ─────────────────────────────────────────────────────────────
/// Counts tokens under one named encoding.
pub trait TokenCounter {
    fn count(&self, text: &str) -> Result<usize>;

    /// Name of the encoding, for logging
    fn encoding(&self) -> &str;
}

// ─── SentenceClassifier ───────────────────────────────────────────────────────
/// Labels a chunk of sentences in one request.
pub trait SentenceClassifier {
    /// Returns one annotation per input sentence, in the order
    /// the service produced them. The caller checks the length.
    fn classify(&self, sentences: &[String]) -> Result<Vec<Annotation>, ClassifyError>;
}
