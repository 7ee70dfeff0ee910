// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs, enums and traits that define the records
// flowing through both stages of the pipeline.
//
// Rules for this layer:
//   - NO file I/O or network calls
//   - NO HTTP or tokenizer types
//   - Only plain data, the failure taxonomy of a chunk,
//     and the traits other layers implement

// A raw MD&A filing row
pub mod filing;

// One sentence of a sampled filing, with its token cost
pub mod sentence;

// The four labels the classifier assigns to a sentence
pub mod annotation;

// Why a classification chunk can fail
pub mod error;

// Core abstractions (traits) that other layers implement
pub mod traits;
