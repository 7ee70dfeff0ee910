// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Concerns shared by both stages that don't belong to the
// pipeline logic itself:
//
//   token_counter.rs — Token counts per sentence (tiktoken-rs
//                      or a HuggingFace tokenizer.json) and
//                      the flat per-token cost model.
//
//   csv_store.rs     — Reading and writing the sentence,
//                      annotation and cost tables.
//
//   cost_report.rs   — Per-filing token and cost totals of a
//                      prepared sample.
//
//   run_report.rs    — JSON record of the per-chunk outcomes
//                      of a classification run.

/// Token counting and cost estimation
pub mod token_counter;

/// CSV table reading and writing
pub mod csv_store;

/// Per-filing cost totals
pub mod cost_report;

/// Classification run report persistence
pub mod run_report;
