// ============================================================
// Layer 4 — Filing Loader
// ============================================================
// Reads the raw filings table with the `csv` crate.
//
// Expected columns (others are ignored):
//   filename,date,mda
//
// A header without any of these columns is fatal.
//
// Row handling:
//   - a row the CSV reader cannot parse      → skipped, warned
//   - `mda` missing or whitespace only       → dropped
//   - `date` empty                           → dropped (no year)
//   - `date` present but not a known format  → error, run stops
//
// The year is derived with chrono, trying the date layouts
// that filing indexes commonly use.
//
// Reference: csv crate tutorial (serde deserialisation)
//            chrono crate documentation

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use serde::Deserialize;
use std::{fs::File, io::Read, path::PathBuf};

use crate::domain::filing::FilingRecord;
use crate::domain::traits::FilingSource;

/// Loads filing records from a CSV file on disk.
/// Implements the FilingSource trait from Layer 3.
pub struct CsvFilingLoader {
    path: PathBuf,
}

impl CsvFilingLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FilingSource for CsvFilingLoader {
    fn load_all(&self) -> Result<Vec<FilingRecord>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Cannot open filings file '{}'", self.path.display()))?;
        let filings = read_filings(file)?;
        tracing::info!(
            "Loaded {} filings with MD&A text from '{}'",
            filings.len(),
            self.path.display()
        );
        Ok(filings)
    }
}

/// Columns every filings table must carry.
const REQUIRED_COLUMNS: &[&str] = &["filename", "date", "mda"];

/// One CSV row as written. `mda` may be empty.
#[derive(Debug, Deserialize)]
struct RawFilingRow {
    filename: String,
    date:     String,
    mda:      Option<String>,
}

/// Read filing records from any CSV source.
pub fn read_filings<R: Read>(reader: R) -> Result<Vec<FilingRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let headers = csv_reader.headers().context("Cannot read filings header")?;
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h.trim() == *col))
        .collect();
    if !missing.is_empty() {
        bail!("Filings table is missing column(s): {}", missing.join(", "));
    }

    let mut filings = Vec::new();
    let mut skipped = 0usize;
    let mut empty   = 0usize;

    for (idx, row) in csv_reader.deserialize::<RawFilingRow>().enumerate() {
        let row = match row {
            Ok(row) => row,
            // Bad rows are skipped; the rest of the file is still usable
            Err(e) => {
                tracing::warn!("Skipping malformed row {}: {}", idx + 1, e);
                skipped += 1;
                continue;
            }
        };

        let mda = match row.mda {
            Some(text) if !text.trim().is_empty() => text,
            _ => {
                empty += 1;
                continue;
            }
        };

        if row.date.trim().is_empty() {
            tracing::warn!("Dropping '{}': no filing date", row.filename);
            empty += 1;
            continue;
        }

        let year = parse_year(&row.date)
            .with_context(|| format!("Bad date for filing '{}'", row.filename))?;

        filings.push(FilingRecord::new(row.filename, row.date, mda, year));
    }

    tracing::debug!(
        "Read {} filings ({} malformed rows skipped, {} without text or date)",
        filings.len(),
        skipped,
        empty
    );
    Ok(filings)
}

/// Extract the calendar year from a filing date string.
///
/// Accepts ISO dates and timestamps, RFC 3339, US-style
/// month/day/year, compact YYYYMMDD, "12-Mar-2021",
/// "March 12, 2021", and a bare year.
pub fn parse_year(date: &str) -> Result<i32> {
    const DATE_FORMATS: &[&str] = &[
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%m/%d/%Y",
        "%d-%b-%Y",
        "%B %d, %Y",
        "%b %d, %Y",
    ];
    const DATETIME_FORMATS: &[&str] = &[
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S%.f",
    ];

    let s = date.trim();

    for fmt in DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Ok(d.year());
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt.year());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.year());
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        match s.len() {
            4 => return Ok(s.parse()?),
            // Compact YYYYMMDD
            8 => {
                let (y, m, d) = (s[..4].parse()?, s[4..6].parse()?, s[6..].parse()?);
                if NaiveDate::from_ymd_opt(y, m, d).is_some() {
                    return Ok(y);
                }
            }
            _ => {}
        }
    }

    bail!("Unrecognised date '{}'", s)
}
