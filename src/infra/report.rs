// ============================================================
// Layer 6 — Report Writer
// ============================================================
// Renders a CommonWordsReport to the results directory.
//
// Files written per report (stem = report.name):
//   <stem>.csv   ← one row per ranked word
//   <stem>.json  ← title, criterion, top_k and the same rows
//
// Example CSV output:
//   word,counter,lines,documents
//   "the","5","[""the line 1"",""the line 2""]","[""doc1.txt""]"
//
// Every cell is quoted. List cells hold the JSON array, so a
// reader can recover the exact strings, commas and all.
//
// With debug on, the whole filtered frequency index is also
// dumped to common_words.json in the same directory.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::stats::engine::{CommonWordsReport, ReportRow};
use crate::stats::frequency::FrequencyIndex;

/// File name of the debug dump of the filtered frequency index
pub const INDEX_DUMP_FILE: &str = "common_words.json";

const CSV_HEADER: &str = "word,counter,lines,documents";

/// Writes reports into one results directory.
pub struct ReportWriter {
    dir: PathBuf,
}

impl ReportWriter {
    /// Create the writer, creating the results directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create results directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `<name>.csv`. Returns the path written.
    pub fn write_csv(&self, report: &CommonWordsReport) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.csv", report.name));
        let file = fs::File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        writeln!(out, "{CSV_HEADER}")?;
        for row in &report.rows {
            writeln!(out, "{}", csv_row(row)?)?;
        }
        out.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", report.rows.len(), path.display());
        Ok(path)
    }

    /// Write `<name>.json`. Returns the path written.
    pub fn write_json(&self, report: &CommonWordsReport) -> Result<PathBuf> {
        let path = self.dir.join(format!("{}.json", report.name));
        let json = serde_json::to_string_pretty(report)?;
        fs::write(&path, json).with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Wrote report '{}'", path.display());
        Ok(path)
    }

    /// Dump the filtered frequency index to `common_words.json`.
    pub fn write_index(&self, index: &FrequencyIndex) -> Result<PathBuf> {
        let path = self.dir.join(INDEX_DUMP_FILE);
        let json = serde_json::to_string_pretty(index)?;
        fs::write(&path, json).with_context(|| format!("Cannot write '{}'", path.display()))?;
        tracing::debug!("Dumped {} common words to '{}'", index.len(), path.display());
        Ok(path)
    }
}

fn csv_row(row: &ReportRow) -> Result<String> {
    let lines = serde_json::to_string(&row.lines)?;
    let documents = serde_json::to_string(&row.documents)?;
    Ok([
        quote(&row.word),
        quote(&row.counter.to_string()),
        quote(&lines),
        quote(&documents),
    ]
    .join(","))
}

fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}
