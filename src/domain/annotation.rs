// ============================================================
// Layer 3 — Annotation Domain Types
// ============================================================
// The classifier labels every sentence on four axes:
//
//   forward_looking — about future events or expectations?   yes / no
//   quantitative    — contains numbers, percentages, amounts? yes / no
//   about_earnings  — refers to financial performance?        yes / no
//   sentiment       — tone of the sentence
//                     positive / negative / neutral / uncertain
//
// The enums serialise to the same lower-case strings the
// response schema enumerates, so the JSON returned by the
// service and the CSV written to disk share one vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A two-valued label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn as_str(&self) -> &'static str {
        match self {
            YesNo::Yes => "yes",
            YesNo::No  => "no",
        }
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tone of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    /// Optimistic
    Positive,
    /// Pessimistic
    Negative,
    /// Factual
    Neutral,
    /// Ambiguous
    Uncertain,
}

impl Sentiment {
    pub const ALL: [Sentiment; 4] = [
        Sentiment::Positive,
        Sentiment::Negative,
        Sentiment::Neutral,
        Sentiment::Uncertain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive  => "positive",
            Sentiment::Negative  => "negative",
            Sentiment::Neutral   => "neutral",
            Sentiment::Uncertain => "uncertain",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four labels for one sentence, as returned by the service.
/// Unknown fields are rejected so a response that drifts from
/// the schema fails the chunk instead of being half-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Annotation {
    pub forward_looking: YesNo,
    pub quantitative:    YesNo,
    pub about_earnings:  YesNo,
    pub sentiment:       Sentiment,
}

/// One row of the final output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub filename:        String,
    pub sentence:        String,
    pub forward_looking: YesNo,
    pub quantitative:    YesNo,
    pub about_earnings:  YesNo,
    pub sentiment:       Sentiment,
}

impl AnnotationRecord {
    /// Attach an annotation to the sentence and filing it describes.
    pub fn new(
        filename:   impl Into<String>,
        sentence:   impl Into<String>,
        annotation: Annotation,
    ) -> Self {
        Self {
            filename:        filename.into(),
            sentence:        sentence.into(),
            forward_looking: annotation.forward_looking,
            quantitative:    annotation.quantitative,
            about_earnings:  annotation.about_earnings,
            sentiment:       annotation.sentiment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_deserialise_from_lowercase() {
        let json = r#"{"forward_looking":"yes","quantitative":"no","about_earnings":"yes","sentiment":"uncertain"}"#;
        let a: Annotation = serde_json::from_str(json).unwrap();
        assert_eq!(a.forward_looking, YesNo::Yes);
        assert_eq!(a.quantitative, YesNo::No);
        assert_eq!(a.sentiment, Sentiment::Uncertain);
    }

    #[test]
    fn test_unknown_sentiment_is_rejected() {
        let json = r#"{"forward_looking":"yes","quantitative":"no","about_earnings":"yes","sentiment":"mixed"}"#;
        assert!(serde_json::from_str::<Annotation>(json).is_err());
    }

    #[test]
    fn test_extra_field_is_rejected() {
        let json = r#"{"forward_looking":"no","quantitative":"no","about_earnings":"no","sentiment":"neutral","sentence":"x"}"#;
        assert!(serde_json::from_str::<Annotation>(json).is_err());
    }

    #[test]
    fn test_record_keeps_annotation() {
        let a = Annotation {
            forward_looking: YesNo::No,
            quantitative:    YesNo::Yes,
            about_earnings:  YesNo::Yes,
            sentiment:       Sentiment::Positive,
        };
        let r = AnnotationRecord::new("a.txt", "Revenue grew 10% this year.", a);
        assert_eq!(r.quantitative, YesNo::Yes);
        assert_eq!(r.filename, "a.txt");
        assert_eq!(r.sentiment.to_string(), "positive");
    }
}
