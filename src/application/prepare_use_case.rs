// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the preparation stage in order:
//
//   Step 1: Load raw filings                 (Layer 4 - data)
//   Step 2: Clean MD&A text, drop empties    (Layer 4 - data)
//   Step 3: Sample up to N filings per year  (Layer 4 - data)
//   Step 4: Segment into sentences, filter   (Layer 4 - data)
//   Step 5: Count tokens, estimate cost      (Layer 6 - infra)
//   Step 6: Write the sentence table         (Layer 6 - infra)
//   Step 7: Log and optionally save totals   (Layer 6 - infra)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::{
    loader::CsvFilingLoader,
    preprocessor::Preprocessor,
    sampler::{sample_per_group, DEFAULT_PER_YEAR, DEFAULT_SEED},
    segmenter::filter_sentences,
};
use crate::domain::{
    filing::FilingRecord,
    sentence::SentenceRecord,
    traits::{FilingSource, SentenceSegmenter, TokenCounter},
};
use crate::infra::{
    cost_report::CostSummary,
    csv_store::{self, SENTENCE_HEADER},
    token_counter::{CostModel, DEFAULT_COST_PER_MILLION},
};

// ─── Prepare Configuration ───────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    pub input:            String,
    pub output:           String,
    pub per_year:         usize,
    pub seed:             u64,
    pub cost_per_million: f64,
    pub cost_report:      Option<String>,
}

impl Default for PrepareConfig {
    fn default() -> Self {
        Self {
            input:            "10ks_mda.csv".to_string(),
            output:           "samples_cleaned.csv".to_string(),
            per_year:         DEFAULT_PER_YEAR,
            seed:             DEFAULT_SEED,
            cost_per_million: DEFAULT_COST_PER_MILLION,
            cost_report:      None,
        }
    }
}

// ─── PrepareUseCase ───────────────────────────────────────────────────────────
pub struct PrepareUseCase {
    config:    PrepareConfig,
    segmenter: Box<dyn SentenceSegmenter>,
    counter:   Box<dyn TokenCounter>,
}

impl PrepareUseCase {
    pub fn new(
        config:    PrepareConfig,
        segmenter: Box<dyn SentenceSegmenter>,
        counter:   Box<dyn TokenCounter>,
    ) -> Self {
        Self { config, segmenter, counter }
    }

    /// Run the whole stage against the configured files.
    pub fn execute(&self) -> Result<CostSummary> {
        let cfg = &self.config;

        // ── Step 1: Load raw filings ─────────────────────────────────────────
        let filings = CsvFilingLoader::new(&cfg.input).load_all()?;

        // ── Steps 2-5: Clean, sample, segment, count ─────────────────────────
        let rows = self.prepare_filings(filings)?;

        // ── Step 6: Write the sentence table ─────────────────────────────────
        csv_store::write_records(&cfg.output, SENTENCE_HEADER, &rows)?;
        tracing::info!("Wrote {} sentences to '{}'", rows.len(), cfg.output);

        // ── Step 7: Totals ───────────────────────────────────────────────────
        let summary = CostSummary::from_sentences(&rows);
        summary.log();
        if let Some(path) = &cfg.cost_report {
            summary.write_csv(path)?;
        }

        Ok(summary)
    }

    /// Turn loaded filings into sentence rows, without touching disk.
    pub fn prepare_filings(&self, filings: Vec<FilingRecord>) -> Result<Vec<SentenceRecord>> {
        let cfg = &self.config;

        // ── Step 2: Clean, then drop filings with no prose left ──────────────
        let preprocessor = Preprocessor::new()?;
        let loaded = filings.len();
        let cleaned: Vec<FilingRecord> = filings
            .into_iter()
            .map(|mut f| {
                f.mda = preprocessor.clean(&f.mda);
                f
            })
            .filter(|f| !f.mda.is_empty())
            .collect();
        if cleaned.len() < loaded {
            tracing::info!(
                "{} of {} filings had no prose left after cleaning",
                loaded - cleaned.len(),
                loaded
            );
        }

        // ── Step 3: Sample per year ──────────────────────────────────────────
        let sampled = sample_per_group(cleaned, |f| f.year, cfg.per_year, cfg.seed);
        tracing::info!(
            "Sampled {} filings (up to {} per year, seed {})",
            sampled.len(),
            cfg.per_year,
            cfg.seed
        );

        // ── Steps 4-5: Segment, filter, count ────────────────────────────────
        tracing::info!(
            "Segmenting with {}, counting tokens with {}",
            self.segmenter.name(),
            self.counter.encoding()
        );
        let cost_model = CostModel::new(cfg.cost_per_million);
        let mut rows = Vec::new();

        for filing in &sampled {
            let sentences = filter_sentences(self.segmenter.segment(&filing.mda));
            if sentences.is_empty() {
                tracing::debug!("'{}' has no sentence long enough to keep", filing.filename);
            }
            for sentence in sentences {
                let tokens = self
                    .counter
                    .count(&sentence)
                    .with_context(|| format!("Token count failed for '{}'", filing.filename))?
                    as u64;
                rows.push(SentenceRecord::new(
                    filing.filename.as_str(),
                    sentence,
                    tokens,
                    cost_model.cost(tokens),
                ));
            }
        }

        Ok(rows)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::preprocessor::word_count;
    use crate::data::segmenter::UnicodeSentenceSegmenter;
    use std::fs;

    /// One token per whitespace-delimited word.
    struct WordCounter;

    impl TokenCounter for WordCounter {
        fn count(&self, text: &str) -> Result<usize> {
            Ok(word_count(text))
        }
        fn encoding(&self) -> &str {
            "words"
        }
    }

    fn use_case(config: PrepareConfig) -> PrepareUseCase {
        PrepareUseCase::new(
            config,
            Box::new(UnicodeSentenceSegmenter::new()),
            Box::new(WordCounter),
        )
    }

    fn filing(name: &str, year: i32, mda: &str) -> FilingRecord {
        FilingRecord::new(name, format!("{year}-03-01"), mda, year)
    }

    #[test]
    fn test_sentences_are_cleaned_filtered_and_costed() {
        let uc = use_case(PrepareConfig { cost_per_million: 1_000_000.0, ..Default::default() });
        let mda = "MANAGEMENT'S DISCUSSION\n\
                   Net income rose by a wide margin. Good year.\n\
                   Total Assets  1,200  1,100\n\
                   We expect loan growth to continue next year.";
        let rows = uc.prepare_filings(vec![filing("a.txt", 2019, mda)]).unwrap();

        let texts: Vec<&str> = rows.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Net income rose by a wide margin.", "We expect loan growth to continue next year."]
        );
        assert_eq!(rows[0].num_tokens, 7);
        // One USD per token at this price
        assert_eq!(rows[0].cost, 7.0);
        assert!(rows.iter().all(|r| r.filename == "a.txt"));
    }

    #[test]
    fn test_filings_with_no_prose_are_dropped() {
        let uc = use_case(PrepareConfig::default());
        let rows = uc
            .prepare_filings(vec![
                filing("tables.txt", 2019, "TOTAL\nLoans    100    200"),
                filing("prose.txt", 2019, "Deposits grew across all of our markets."),
            ])
            .unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].filename, "prose.txt");
    }

    #[test]
    fn test_sampling_caps_each_year() {
        let uc = use_case(PrepareConfig { per_year: 2, ..Default::default() });
        let filings: Vec<FilingRecord> = (0..5)
            .map(|i| filing(&format!("f{i}.txt"), 2019 + (i % 2), "Our branches opened in new towns."))
            .collect();
        let rows = uc.prepare_filings(filings).unwrap();
        // Two per year, one sentence each
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_execute_writes_table_and_cost_report() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("10ks_mda.csv");
        fs::write(
            &input,
            "filename,date,mda\n\
             a.txt,2019-03-01,\"Revenue increased in the third quarter. Margins improved due to lower costs.\"\n\
             b.txt,2020-03-01,\n",
        )
        .unwrap();

        let output = dir.path().join("out/samples_cleaned.csv");
        let report = dir.path().join("costs.csv");
        let uc = use_case(PrepareConfig {
            input:       input.to_string_lossy().into_owned(),
            output:      output.to_string_lossy().into_owned(),
            cost_report: Some(report.to_string_lossy().into_owned()),
            ..Default::default()
        });

        let summary = uc.execute().unwrap();
        assert_eq!(summary.sentence_count, 2);
        assert_eq!(summary.filings.len(), 1);
        assert_eq!(summary.total_tokens, 12);

        let rows: Vec<SentenceRecord> = csv_store::read_records(&output).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, "Margins improved due to lower costs.");

        let costs = fs::read_to_string(&report).unwrap();
        assert!(costs.starts_with("filename,num_tokens,cost"));
        assert!(costs.contains("a.txt,12,"));
    }

    #[test]
    fn test_empty_input_writes_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.csv");
        fs::write(&input, "filename,date,mda\n").unwrap();
        let output = dir.path().join("out.csv");

        let uc = use_case(PrepareConfig {
            input:  input.to_string_lossy().into_owned(),
            output: output.to_string_lossy().into_owned(),
            ..Default::default()
        });
        let summary = uc.execute().unwrap();
        assert_eq!(summary.sentence_count, 0);
        assert_eq!(
            fs::read_to_string(&output).unwrap().trim_end(),
            "filename,sentences,num_tokens,cost"
        );
    }
}
