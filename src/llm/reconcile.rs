// ============================================================
// Layer 5 — Response Reconciliation
// ============================================================
// Turns the model's reply into output rows.
//
//   parse_pairs — message content → Vec<Annotation>
//                 (must be {"pairs": [...]}, nothing else)
//   zip_chunk   — aligns annotation i with sentence i of the
//                 chunk, but only if both lists have the same
//                 length. A shorter or longer array would
//                 shift every label after the gap, so the
//                 whole chunk is rejected instead.

use serde::Deserialize;

use crate::domain::annotation::{Annotation, AnnotationRecord};
use crate::domain::error::ClassifyError;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PairsEnvelope {
    pairs: Vec<Annotation>,
}

/// Parse the schema-constrained message content.
pub fn parse_pairs(content: &str) -> Result<Vec<Annotation>, ClassifyError> {
    let envelope: PairsEnvelope = serde_json::from_str(content)?;
    Ok(envelope.pairs)
}

/// Attach each annotation to its sentence, in order.
pub fn zip_chunk(
    filename:    &str,
    sentences:   &[String],
    annotations: Vec<Annotation>,
) -> Result<Vec<AnnotationRecord>, ClassifyError> {
    if annotations.len() != sentences.len() {
        return Err(ClassifyError::LengthMismatch {
            expected: sentences.len(),
            actual:   annotations.len(),
        });
    }

    Ok(sentences
        .iter()
        .zip(annotations)
        .map(|(sentence, annotation)| AnnotationRecord::new(filename, sentence.as_str(), annotation))
        .collect())
}
