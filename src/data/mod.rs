// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the raw filings table and the chunks sent
// to the classifier.
//
//   filings CSV
//       │
//       ▼
//   CsvFilingLoader   → reads rows, derives the year
//       │
//       ▼
//   Preprocessor      → strips tables, headers, fragments
//       │
//       ▼
//   sample_per_group  → at most N filings per year
//       │
//       ▼
//   Segmenter         → sentences, short ones filtered
//       │
//       ▼
//   (token counting and cost, Layer 6)
//       │
//       ▼
//   SentenceChunker   → fixed-size chunks per filing
//
// Each module does one step and is tested on its own.

/// Loads raw filings from CSV
pub mod loader;

/// Removes table, header and fragment lines
pub mod preprocessor;

/// Per-year sampling with a fixed seed
pub mod sampler;

/// Sentence boundaries and the short-sentence filter
pub mod segmenter;

/// Groups sentences by filing and slices them into chunks
pub mod chunker;
