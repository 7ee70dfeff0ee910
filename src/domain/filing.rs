// ============================================================
// Layer 3 — Filing Domain Type
// ============================================================
// One row of the raw input table: the source file name,
// the filing date as written, the MD&A text, and the year
// derived from the date. The year is the sampling stratum.

use serde::{Deserialize, Serialize};

/// A raw filing record loaded from the input CSV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilingRecord {
    /// The filing's file name, used as the document key downstream
    pub filename: String,

    /// Filing date exactly as it appeared in the input
    pub date: String,

    /// Management Discussion & Analysis text.
    /// Raw on load, replaced by the cleaned text during `prepare`.
    pub mda: String,

    /// Calendar year parsed from `date`
    pub year: i32,
}

impl FilingRecord {
    pub fn new(
        filename: impl Into<String>,
        date:     impl Into<String>,
        mda:      impl Into<String>,
        year:     i32,
    ) -> Self {
        Self {
            filename: filename.into(),
            date:     date.into(),
            mda:      mda.into(),
            year,
        }
    }
}
