// ============================================================
// Layer 6 — CSV Store
// ============================================================
// Reads and writes the tabular files both stages exchange:
//
//   samples_cleaned.csv     filename,sentences,num_tokens,cost
//   forward_looking_df.csv  filename,sentence,forward_looking,
//                           quantitative,about_earnings,sentiment
//   cost report             filename,num_tokens,cost
//
// Records are (de)serialised with serde through the csv crate.
// The header row is always written, even for an empty table,
// so the next stage can still read the file.
//
// Reading is strict here: the intermediate and final tables
// are produced by this program, so a malformed row means the
// file is damaged and the run stops.

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs,
    io::{Read, Write},
    path::Path,
};

/// Column names of the sentence table.
pub const SENTENCE_HEADER: &[&str] = &["filename", "sentences", "num_tokens", "cost"];

/// Column names of the annotation table.
pub const ANNOTATION_HEADER: &[&str] = &[
    "filename",
    "sentence",
    "forward_looking",
    "quantitative",
    "about_earnings",
    "sentiment",
];

/// Column names of the per-filing cost report.
pub const FILING_COST_HEADER: &[&str] = &["filename", "num_tokens", "cost"];

/// Write `records` to a CSV file, creating parent directories.
pub fn write_records<T: Serialize>(
    path:    impl AsRef<Path>,
    header:  &[&str],
    records: &[T],
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Cannot create directory '{}'", parent.display()))?;
    }

    let file = fs::File::create(path)
        .with_context(|| format!("Cannot create '{}'", path.display()))?;
    write_to(file, header, records)
        .with_context(|| format!("Cannot write CSV '{}'", path.display()))?;

    tracing::debug!("Wrote {} rows to '{}'", records.len(), path.display());
    Ok(())
}

/// Write `records` as CSV to any writer.
pub fn write_to<W: Write, T: Serialize>(writer: W, header: &[&str], records: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    // serde only emits a header alongside the first record
    if records.is_empty() {
        wtr.write_record(header)?;
    }
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Read every record of a CSV file.
pub fn read_records<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<Vec<T>> {
    let path = path.as_ref();
    let file = fs::File::open(path)
        .with_context(|| format!("Cannot open '{}'", path.display()))?;
    let records = read_from(file)
        .with_context(|| format!("Cannot read CSV '{}'", path.display()))?;

    tracing::debug!("Read {} rows from '{}'", records.len(), path.display());
    Ok(records)
}

/// Read every record from any CSV source.
pub fn read_from<R: Read, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (idx, row) in rdr.deserialize().enumerate() {
        records.push(row.with_context(|| format!("Bad CSV row {}", idx + 1))?);
    }
    Ok(records)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::annotation::{Annotation, AnnotationRecord, Sentiment, YesNo};
    use crate::domain::sentence::SentenceRecord;

    #[test]
    fn test_sentence_table_columns() {
        let rows = vec![SentenceRecord::new("a.txt", "Revenue rose 5% in 2023, we said.", 12, 3e-5)];
        let mut buf = Vec::new();
        write_to(&mut buf, SENTENCE_HEADER, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("filename,sentences,num_tokens,cost\n"));
        assert!(text.contains("\"Revenue rose 5% in 2023, we said.\""));

        let back: Vec<SentenceRecord> = read_from(text.as_bytes()).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_annotation_labels_written_lowercase() {
        let a = Annotation {
            forward_looking: YesNo::Yes,
            quantitative:    YesNo::No,
            about_earnings:  YesNo::Yes,
            sentiment:       Sentiment::Neutral,
        };
        let rows = vec![AnnotationRecord::new("a.txt", "We expect growth next year.", a)];
        let mut buf = Vec::new();
        write_to(&mut buf, ANNOTATION_HEADER, &rows).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "filename,sentence,forward_looking,quantitative,about_earnings,sentiment\n\
             a.txt,We expect growth next year.,yes,no,yes,neutral\n"
        );
    }

    #[test]
    fn test_empty_table_still_has_header() {
        let rows: Vec<AnnotationRecord> = Vec::new();
        let mut buf = Vec::new();
        write_to(&mut buf, ANNOTATION_HEADER, &rows).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "filename,sentence,forward_looking,quantitative,about_earnings,sentiment\n"
        );
    }

    #[test]
    fn test_file_round_trip_creates_directories() {
        let dir  = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("samples.csv");
        let rows = vec![
            SentenceRecord::new("a.txt", "First sentence with words.", 6, 1.5e-5),
            SentenceRecord::new("b.txt", "Second sentence with words.", 6, 1.5e-5),
        ];
        write_records(&path, SENTENCE_HEADER, &rows).unwrap();
        let back: Vec<SentenceRecord> = read_records(&path).unwrap();
        assert_eq!(back, rows);
    }

    #[test]
    fn test_malformed_row_is_an_error() {
        let text = "filename,sentences,num_tokens,cost\na.txt,Some sentence here.,many,0.1\n";
        assert!(read_from::<_, SentenceRecord>(text.as_bytes()).is_err());
    }
}
