// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// This layer orchestrates the other layers to run one
// pipeline stage end to end.
//
// Rules for this layer:
//   - No prompt building or HTTP here (that's Layer 5)
//   - No printing here (that's Layer 1)
//   - File access only through Layer 4 and Layer 6
//   - Only workflow coordination
//
// The two stages are independent runs. `prepare` writes the
// sentence table; `classify` reads it back.

// The cleaning, sampling and costing workflow
pub mod prepare_use_case;

// The chunked LLM classification workflow
pub mod classify_use_case;
