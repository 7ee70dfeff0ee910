// ============================================================
// Layer 4 — Sentence Chunker
// ============================================================
// Prepares the classification workload:
//
//   1. group_by_filename — one ordered sentence list per filing,
//                          filings in ascending name order
//   2. SentenceChunker   — slices each list into consecutive,
//                          non-overlapping chunks of `chunk_size`
//
// Example with chunk_size=20 and 45 sentences:
//   Chunk 1: sentences  1-20
//   Chunk 2: sentences 21-40
//   Chunk 3: sentences 41-45   (last chunk is short)
//
// Each chunk becomes one request to the classifier, so a
// failure never affects more than `chunk_size` sentences.

use std::collections::BTreeMap;

use crate::domain::sentence::SentenceRecord;

/// Default number of sentences per classification request.
pub const DEFAULT_CHUNK_SIZE: usize = 20;

/// Group sentence texts by filing, keeping input order inside
/// each filing.
pub fn group_by_filename(rows: &[SentenceRecord]) -> BTreeMap<String, Vec<String>> {
    let mut groups: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for row in rows {
        groups
            .entry(row.filename.clone())
            .or_default()
            .push(row.text.clone());
    }
    groups
}

pub struct SentenceChunker {
    /// Sentences per chunk
    chunk_size: usize,
}

impl SentenceChunker {
    /// Create a new SentenceChunker.
    ///
    /// # Panics
    /// Panics if chunk_size is 0.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be at least 1");
        Self { chunk_size }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Split sentences into consecutive chunks. Borrowed slices,
    /// so concatenating them gives back the input exactly.
    pub fn chunk<'a>(&self, sentences: &'a [String]) -> Vec<&'a [String]> {
        sentences.chunks(self.chunk_size).collect()
    }

    /// Number of chunks `count` sentences produce: ceil(count / chunk_size).
    pub fn num_chunks(&self, count: usize) -> usize {
        count.div_ceil(self.chunk_size)
    }
}

impl Default for SentenceChunker {
    fn default() -> Self {
        Self::new(DEFAULT_CHUNK_SIZE)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sentences(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("Sentence number {i} is here.")).collect()
    }

    #[test]
    fn test_chunk_count_is_ceiling() {
        let c = SentenceChunker::new(20);
        for n in [0, 1, 19, 20, 21, 40, 45, 101] {
            let s = sentences(n);
            assert_eq!(c.chunk(&s).len(), (n + 19) / 20, "n = {n}");
            assert_eq!(c.num_chunks(n), c.chunk(&s).len());
        }
    }

    #[test]
    fn test_concatenation_restores_input() {
        let c = SentenceChunker::new(20);
        let s = sentences(45);
        let rejoined: Vec<String> = c.chunk(&s).concat();
        assert_eq!(rejoined, s);
    }

    #[test]
    fn test_last_chunk_is_short() {
        let c      = SentenceChunker::default();
        let s      = sentences(45);
        let chunks = c.chunk(&s);
        assert_eq!(chunks[0].len(), 20);
        assert_eq!(chunks[1].len(), 20);
        assert_eq!(chunks[2].len(), 5);
    }

    #[test]
    fn test_group_by_filename_keeps_order() {
        let rows = vec![
            SentenceRecord::new("b.txt", "b first sentence here.", 5, 0.0),
            SentenceRecord::new("a.txt", "a first sentence here.", 5, 0.0),
            SentenceRecord::new("b.txt", "b second sentence here.", 5, 0.0),
        ];
        let groups = group_by_filename(&rows);
        let names: Vec<&String> = groups.keys().collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
        assert_eq!(
            groups["b.txt"],
            vec!["b first sentence here.", "b second sentence here."]
        );
    }

    #[test]
    #[should_panic]
    fn test_zero_chunk_size_panics() {
        let _ = SentenceChunker::new(0);
    }
}
