// ============================================================
// Layer 4 — Sentence Segmenter
// ============================================================
// Splits cleaned MD&A prose into sentences.
//
// UnicodeSentenceSegmenter uses the UAX #29 sentence boundary
// rules from `unicode-segmentation`. Those rules already keep
// "U.S. economy" and "approx. ten" together (a period followed
// by a lower-case word is not a boundary), but they break after
// an abbreviation followed by a capitalised name:
//
//   "Dr. | Smith joined the board."
//
// Fragments ending in a title or another abbreviation that
// never closes a sentence are re-joined with the next fragment.
// Company suffixes (Inc., Co., Corp.) and month abbreviations
// are left alone: in filings they end sentences as often as
// not. Degenerate sentences are removed by
// `filter_sentences` afterwards.
//
// Reference: Unicode Standard Annex #29 (Text Segmentation)

use unicode_segmentation::UnicodeSegmentation;

use crate::data::preprocessor::word_count;
use crate::domain::traits::SentenceSegmenter;

/// Sentences with fewer words than this are dropped.
pub const MIN_SENTENCE_WORDS: usize = 4;

/// Abbreviations that end in a period but never end a sentence.
const ABBREVIATIONS: &[&str] = &[
    "Mr.", "Mrs.", "Ms.", "Dr.", "St.", "No.", "Nos.", "vs.", "approx.", "U.S.",
];

pub struct UnicodeSentenceSegmenter;

impl UnicodeSentenceSegmenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for UnicodeSentenceSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<String> {
        let mut sentences: Vec<String> = Vec::new();
        let mut current = String::new();

        // unicode_sentences only yields pieces with alphanumeric content
        for piece in text.unicode_sentences() {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }

            if !current.is_empty() && ends_with_abbreviation(&current) {
                current.push(' ');
                current.push_str(piece);
                continue;
            }

            if !current.is_empty() {
                sentences.push(std::mem::take(&mut current));
            }
            current.push_str(piece);
        }

        if !current.is_empty() {
            sentences.push(current);
        }

        sentences
    }

    fn name(&self) -> &str {
        "uax29"
    }
}

fn ends_with_abbreviation(text: &str) -> bool {
    text.split_whitespace()
        .next_back()
        .is_some_and(|last| ABBREVIATIONS.contains(&last))
}

/// Drop sentences that are blank or have fewer than four words.
pub fn filter_sentences(sentences: Vec<String>) -> Vec<String> {
    sentences
        .into_iter()
        .filter(|s| !s.trim().is_empty() && word_count(s) >= MIN_SENTENCE_WORDS)
        .collect()
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn seg(text: &str) -> Vec<String> {
        UnicodeSentenceSegmenter::new().segment(text)
    }

    #[test]
    fn test_splits_on_sentence_ends() {
        let out = seg("Revenue grew substantially. We expect continued growth next year.");
        assert_eq!(
            out,
            vec!["Revenue grew substantially.", "We expect continued growth next year."]
        );
    }

    #[test]
    fn test_question_and_exclamation() {
        let out = seg("Will rates rise again? Nobody can say for sure! We remain cautious.");
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_abbreviation_before_name_is_rejoined() {
        let out = seg("Dr. Smith joined the board in March. He chairs the audit committee.");
        assert_eq!(
            out,
            vec![
                "Dr. Smith joined the board in March.",
                "He chairs the audit committee.",
            ]
        );
    }

    #[test]
    fn test_us_before_capital_is_rejoined() {
        let out = seg("All amounts are in U.S. Dollars for every period. Rates rose.");
        assert_eq!(out[0], "All amounts are in U.S. Dollars for every period.");
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_company_suffix_ends_sentence() {
        let out = seg("We sold the unit to Acme Co. The sale closed in May.");
        assert_eq!(out, vec!["We sold the unit to Acme Co.", "The sale closed in May."]);

        let out = seg("The loan was repaid by Foo, Inc. Deposits rose in the quarter.");
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], "The loan was repaid by Foo, Inc.");
    }

    #[test]
    fn test_sentences_are_trimmed_and_non_empty() {
        let out = seg("   First sentence is here.    Second one follows.   ");
        assert!(out.iter().all(|s| !s.is_empty() && s.trim() == s));
    }

    #[test]
    fn test_empty_text() {
        assert!(seg("").is_empty());
        assert!(seg("   ").is_empty());
    }

    #[test]
    fn test_filter_removes_short_and_blank() {
        let sentences = vec![
            "Revenue grew substantially.".to_string(),
            "   ".to_string(),
            "We expect continued growth next year.".to_string(),
            "See Note 4.".to_string(),
        ];
        let kept = filter_sentences(sentences);
        assert_eq!(kept, vec!["We expect continued growth next year."]);
        assert!(kept.iter().all(|s| word_count(s) >= MIN_SENTENCE_WORDS));
    }
}
