//! Raw collector CSV ingest.
//!
//! The collector layer drops per-outlet CSVs under `<raw_data_dir>/<outlet>/`.
//! Column names vary by collector (Guardian API, GDELT, site scrapers), so
//! rows are standardized through serde aliases on [`RawRow`]. Malformed rows
//! abort the load: silently dropping them would skew the balance invariant.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use framing_core::records::parse_year;
use framing_core::{ArticleRecord, DataError, SourceRegistry};
use serde::{Deserialize, Serialize};

use crate::CorpusError;

/// One raw CSV row, with the column aliases the collectors actually emit.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(alias = "link")]
    url: Option<String>,
    #[serde(alias = "source_name", alias = "publication")]
    source: Option<String>,
    #[serde(alias = "title")]
    headline: Option<String>,
    #[serde(
        alias = "body",
        alias = "text",
        alias = "content",
        alias = "article_text"
    )]
    body_text: Option<String>,
    #[serde(alias = "date", alias = "pub_date", alias = "seendate")]
    publication_date: Option<String>,
    /// Float-typed because pandas-era CSVs carry years like `2020.0`.
    year: Option<f64>,
}

/// Everything `load_raw_corpus` learned about the input, for the audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestSummary {
    pub files_read: usize,
    pub raw_count: usize,
    pub outside_year_window: usize,
    pub duplicates_removed: usize,
    pub record_count: usize,
}

/// Ingested records plus their provenance summary.
#[derive(Debug)]
pub struct RawCorpus {
    pub records: Vec<ArticleRecord>,
    pub summary: IngestSummary,
}

/// Parse article rows from one CSV stream.
///
/// `default_source` (usually the outlet directory name) is used when a row
/// has no source column; `file_label` only feeds error messages.
///
/// # Errors
///
/// Fails fast with `CorpusError` on unreadable CSV, a row without a URL,
/// a source the registry does not know, or a row with no resolvable year.
pub fn read_articles<R: Read>(
    reader: R,
    default_source: Option<&str>,
    registry: &SourceRegistry,
    file_label: &str,
) -> Result<Vec<ArticleRecord>, CorpusError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let mut records = Vec::new();
    for (row_idx, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = row.map_err(|e| CorpusError::Csv {
            file: file_label.to_string(),
            source: e,
        })?;

        let url = row
            .url
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| DataError::MissingUrl {
                file: file_label.to_string(),
                // Header is line 1; row_idx 0 is line 2.
                row: row_idx + 2,
            })?
            .to_string();

        let source = row
            .source
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .or(default_source)
            .unwrap_or_default()
            .to_string();

        let category =
            registry
                .category_for(&source)
                .ok_or_else(|| DataError::UnknownSource {
                    url: url.clone(),
                    source_name: source.clone(),
                })?;

        #[allow(clippy::cast_possible_truncation)]
        let year = row
            .year
            .map(|y| y as i32)
            .or_else(|| row.publication_date.as_deref().and_then(parse_year))
            .ok_or_else(|| DataError::MissingYear {
                url: url.clone(),
                raw: row.publication_date.clone(),
            })?;

        records.push(ArticleRecord {
            url,
            source,
            category,
            year,
            headline: row.headline.unwrap_or_default(),
            body_text: row.body_text.unwrap_or_default(),
            clean_text: String::new(),
            token_count: 0,
            publication_date: row.publication_date,
        });
    }

    Ok(records)
}

/// Read a previously written balanced dataset back from CSV.
///
/// Unlike [`read_articles`] this expects the full output schema (including
/// `clean_text` and `token_count`) and applies no standardization.
///
/// # Errors
///
/// Returns `CorpusError::Csv` on malformed rows.
pub fn read_dataset<R: Read>(reader: R, file_label: &str) -> Result<Vec<ArticleRecord>, CorpusError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for row in csv_reader.deserialize::<ArticleRecord>() {
        let record = row.map_err(|e| CorpusError::Csv {
            file: file_label.to_string(),
            source: e,
        })?;
        records.push(record);
    }
    Ok(records)
}

/// Read a balanced dataset CSV from disk.
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be opened or parsed.
pub fn read_dataset_file(path: &Path) -> Result<Vec<ArticleRecord>, CorpusError> {
    let label = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| CorpusError::Io {
        path: label.clone(),
        source: e,
    })?;
    read_dataset(file, &label)
}

/// Drop records whose URL has already been seen, keeping the first
/// occurrence and preserving order otherwise. Returns the survivors and the
/// number removed.
#[must_use]
pub fn dedupe_by_url(records: Vec<ArticleRecord>) -> (Vec<ArticleRecord>, usize) {
    let before = records.len();
    let mut seen = HashSet::new();
    let deduped: Vec<ArticleRecord> = records
        .into_iter()
        .filter(|record| seen.insert(record.url.clone()))
        .collect();
    let removed = before - deduped.len();
    (deduped, removed)
}

/// Load every raw CSV under the per-outlet subdirectories of `raw_dir`,
/// standardize and validate rows, apply the publication-year window, and
/// deduplicate by URL.
///
/// Directories and files are visited in name order so the merged record
/// order (and therefore the downstream sampling) is stable across runs.
///
/// # Errors
///
/// Fails fast on unreadable directories/files or any malformed row
/// (see [`read_articles`]).
pub fn load_raw_corpus(
    raw_dir: &Path,
    registry: &SourceRegistry,
    year_min: i32,
    year_max: i32,
) -> Result<RawCorpus, CorpusError> {
    let mut files_read = 0;
    let mut all_records = Vec::new();

    for dir in sorted_entries(raw_dir)? {
        if !dir.is_dir() {
            continue;
        }
        let outlet = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .replace('_', " ");

        for file in sorted_entries(&dir)? {
            if file.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let label = file.display().to_string();
            let handle = std::fs::File::open(&file).map_err(|e| CorpusError::Io {
                path: label.clone(),
                source: e,
            })?;
            let records = read_articles(handle, Some(&outlet), registry, &label)?;
            tracing::info!(file = %label, rows = records.len(), "loaded raw articles");
            files_read += 1;
            all_records.extend(records);
        }
    }

    let raw_count = all_records.len();
    all_records.retain(|r| r.year >= year_min && r.year <= year_max);
    let outside_year_window = raw_count - all_records.len();

    let (records, duplicates_removed) = dedupe_by_url(all_records);
    tracing::info!(
        files_read,
        raw_count,
        outside_year_window,
        duplicates_removed,
        record_count = records.len(),
        "raw corpus loaded"
    );

    let summary = IngestSummary {
        files_read,
        raw_count,
        outside_year_window,
        duplicates_removed,
        record_count: records.len(),
    };
    Ok(RawCorpus { records, summary })
}

fn sorted_entries(dir: &Path) -> Result<Vec<std::path::PathBuf>, CorpusError> {
    let read_dir = std::fs::read_dir(dir).map_err(|e| CorpusError::Io {
        path: dir.display().to_string(),
        source: e,
    })?;
    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| CorpusError::Io {
            path: dir.display().to_string(),
            source: e,
        })?;
        entries.push(entry.path());
    }
    entries.sort();
    Ok(entries)
}
