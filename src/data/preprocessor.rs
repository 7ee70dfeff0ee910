// ============================================================
// Layer 4 — MD&A Preprocessor
// ============================================================
// Reduces a raw MD&A blob to analysable prose.
//
// Filings embed financial tables, section headings and page
// furniture between paragraphs. They are removed line by line.
// A line is DROPPED if any of these hold:
//   1. It is entirely upper-case          ("RESULTS OF OPERATIONS")
//   2. It has a run of 2+ whitespace chars (table columns)
//   3. It mentions a statement header     (Capital, Assets, ...)
//   4. It has fewer than four words       (page numbers, labels)
//
// Surviving lines are joined with single spaces into one
// flat string. If nothing survives the result is empty and
// the filing is dropped by the caller.
//
// The detectors are heuristics tuned on bank filings; the
// keyword list can be swapped with `with_header_keywords`.
//
// Reference: regex crate documentation

use anyhow::{Context, Result};
use regex::Regex;

/// Statement headers that mark tabular content.
pub const DEFAULT_HEADER_KEYWORDS: &[&str] = &[
    "Risk Based",
    "Capital",
    "Assets",
    "Liabilities",
    "Equity",
];

/// Lines with fewer words than this are dropped.
pub const MIN_LINE_WORDS: usize = 4;

pub struct Preprocessor {
    /// Two or more consecutive whitespace characters
    table_re: Regex,
    /// Case-insensitive alternation of the header keywords,
    /// None when the keyword list is empty
    header_re: Option<Regex>,
}

impl Preprocessor {
    /// Preprocessor with the default header keywords.
    pub fn new() -> Result<Self> {
        Self::with_header_keywords(DEFAULT_HEADER_KEYWORDS)
    }

    /// Preprocessor with a custom header keyword list.
    /// Keywords are matched literally, anywhere in the line.
    pub fn with_header_keywords(keywords: &[&str]) -> Result<Self> {
        let header_re = if keywords.is_empty() {
            None
        } else {
            let alternation = keywords
                .iter()
                .map(|k| regex::escape(k))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!("(?i)({alternation})");
            Some(
                Regex::new(&pattern)
                    .with_context(|| format!("Invalid header pattern '{pattern}'"))?,
            )
        };

        Ok(Self {
            table_re: Regex::new(r"\s{2,}").context("Invalid table pattern")?,
            header_re,
        })
    }

    /// Clean a raw MD&A text into a single line of prose.
    pub fn clean(&self, text: &str) -> String {
        let kept: Vec<String> = split_lines(text.trim())
            .filter(|line| self.keep_line(line))
            .map(|line| line.replace(['\n', '\r'], " "))
            .collect();

        kept.join(" ")
    }

    /// True if the line looks like prose rather than a table,
    /// heading or fragment.
    pub fn keep_line(&self, line: &str) -> bool {
        !(is_all_upper(line)
            || self.table_re.is_match(line)
            || self.header_re.as_ref().is_some_and(|re| re.is_match(line))
            || word_count(line) < MIN_LINE_WORDS)
    }
}

/// Split on every line boundary a text file can carry:
/// \n, \r, vertical tab, form feed, the file/group/record
/// separators, NEL, and the Unicode line/paragraph separators.
/// A "\r\n" pair yields an empty line in between, which the
/// word-count rule drops.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| {
        matches!(
            c,
            '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}'
                | '\u{85}' | '\u{2028}' | '\u{2029}'
        )
    })
}

/// At least one upper-case character and no lower-case ones.
/// "ITEM 7." is upper; "2023 1,200" is not.
fn is_all_upper(line: &str) -> bool {
    let mut has_upper = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
    }
    has_upper
}

/// Number of whitespace-delimited words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
