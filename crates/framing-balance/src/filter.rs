//! Minimum-token-length filter, applied before balancing.

use framing_core::ArticleRecord;

/// Keep only records whose `token_count` meets the threshold, preserving
/// input order. Pure; an empty input yields an empty output.
///
/// Threshold validation (rejecting negatives) happens in the pipeline so
/// this stays a total function.
#[must_use]
pub fn filter_short_articles(
    records: Vec<ArticleRecord>,
    min_token_count: i64,
) -> Vec<ArticleRecord> {
    records
        .into_iter()
        .filter(|record| record.token_count >= min_token_count)
        .collect()
}
