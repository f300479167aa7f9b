//! Article record types shared by every stage of the pipeline.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Which side of the framing comparison an outlet belongs to.
///
/// Every outlet maps to exactly one category; the mapping lives in the
/// [`crate::SourceRegistry`], never in ad-hoc conditionals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceCategory {
    #[serde(rename = "Chinese State Media")]
    ChineseStateMedia,
    #[serde(rename = "Western Media")]
    WesternMedia,
}

impl SourceCategory {
    /// The other category — each year is balanced against this.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            SourceCategory::ChineseStateMedia => SourceCategory::WesternMedia,
            SourceCategory::WesternMedia => SourceCategory::ChineseStateMedia,
        }
    }
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceCategory::ChineseStateMedia => write!(f, "Chinese State Media"),
            SourceCategory::WesternMedia => write!(f, "Western Media"),
        }
    }
}

/// One collected article.
///
/// Created by the corpus reader from a raw CSV row; `clean_text` and
/// `token_count` are filled in by preprocessing. Records are never mutated
/// after that — filtering and sampling produce new vectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Unique identifier; deduplication key.
    pub url: String,
    /// Outlet name, e.g. "China Daily" or "The Guardian".
    pub source: String,
    #[serde(rename = "source_category")]
    pub category: SourceCategory,
    /// Publication year; the stratification key.
    pub year: i32,
    pub headline: String,
    pub body_text: String,
    /// Cleaned body text (URLs, HTML, and noise characters stripped).
    #[serde(default)]
    pub clean_text: String,
    /// Word-level token count of `clean_text` after stopword removal.
    #[serde(default)]
    pub token_count: i64,
    /// Raw publication date as collected, when available.
    #[serde(default)]
    pub publication_date: Option<String>,
}

/// Extract a publication year from a raw date string.
///
/// Accepts the formats the collectors actually emit: RFC 3339 (Guardian),
/// `YYYYMMDDTHHMMSSZ` (GDELT `seendate`), `YYYY-MM-DD`, and falls back to a
/// leading four-digit year.
#[must_use]
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(chrono::Datelike::year(&dt));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y%m%dT%H%M%SZ") {
        return Some(chrono::Datelike::year(&dt.date()));
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(chrono::Datelike::year(&d));
    }

    // Fallback: a leading four-digit year, e.g. "2021/03/05" or "2021".
    let lead: String = raw.chars().take_while(char::is_ascii_digit).collect();
    if lead.len() >= 4 {
        return lead[..4].parse::<i32>().ok();
    }
    None
}
