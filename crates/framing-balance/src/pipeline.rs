//! One-shot balancing pipeline: preprocess → filter → stratify → audit.

use framing_core::ArticleRecord;

use crate::error::BalanceError;
use crate::filter::filter_short_articles;
use crate::stratify::balance;
use crate::text::preprocess;
use crate::types::BalanceAudit;

/// The scalars that govern a balancing run.
#[derive(Debug, Clone, Copy)]
pub struct BalanceOptions {
    pub min_token_count: i64,
    pub random_seed: u64,
}

/// Balanced dataset plus the audit trail of how it was produced.
#[derive(Debug)]
pub struct BalanceResult {
    pub records: Vec<ArticleRecord>,
    pub audit: BalanceAudit,
}

/// Run the full balancing pipeline over a deduplicated record pool.
///
/// 1. Preprocess each record (clean text, token count).
/// 2. Drop records below the minimum token count.
/// 3. Draw the year-stratified, category-balanced sample.
/// 4. Assemble the audit, carrying zero-sample warnings.
///
/// A single-threaded, in-memory batch transformation; no retries, no
/// partial-failure semantics.
///
/// # Errors
///
/// Returns [`BalanceError::InvalidThreshold`] if `min_token_count` is
/// negative.
pub fn run_balance(
    options: &BalanceOptions,
    records: Vec<ArticleRecord>,
) -> Result<BalanceResult, BalanceError> {
    if options.min_token_count < 0 {
        return Err(BalanceError::InvalidThreshold(options.min_token_count));
    }

    let input_count = records.len();
    tracing::info!(input_count, "starting balancing run");

    let processed = preprocess(records);
    let filtered = filter_short_articles(processed, options.min_token_count);
    let filtered_count = filtered.len();
    tracing::info!(
        filtered_count,
        removed = input_count - filtered_count,
        min_token_count = options.min_token_count,
        "applied token-length filter"
    );

    let outcome = balance(&filtered, options.random_seed);
    for warning in &outcome.warnings {
        tracing::warn!(%warning, "zero-sample year");
    }
    tracing::info!(
        balanced_count = outcome.records.len(),
        years = outcome.years.len(),
        dropped_years = outcome.warnings.len(),
        seed = options.random_seed,
        "balancing run complete"
    );

    let audit = BalanceAudit {
        min_token_count: options.min_token_count,
        random_seed: options.random_seed,
        input_count,
        filtered_count,
        balanced_count: outcome.records.len(),
        years: outcome.years,
        warnings: outcome.warnings,
    };

    Ok(BalanceResult {
        records: outcome.records,
        audit,
    })
}

#[cfg(test)]
mod tests {
    use framing_core::SourceCategory;

    use super::*;

    fn record(category: SourceCategory, year: i32, idx: usize, words: usize) -> ArticleRecord {
        ArticleRecord {
            url: format!("https://example.com/{year}/{idx}"),
            source: "Example".to_string(),
            category,
            year,
            headline: String::new(),
            body_text: "monastery festival gathered pilgrims plateau ".repeat(words / 5 + 1),
            clean_text: String::new(),
            token_count: 0,
            publication_date: None,
        }
    }

    #[test]
    fn rejects_negative_threshold() {
        let options = BalanceOptions {
            min_token_count: -5,
            random_seed: 42,
        };
        let result = run_balance(&options, vec![]);
        assert!(
            matches!(result, Err(BalanceError::InvalidThreshold(-5))),
            "expected InvalidThreshold, got: {result:?}"
        );
    }

    #[test]
    fn filters_before_balancing() {
        // 3 long Chinese + 1 short Chinese vs 3 long Western: the short
        // article must not count toward the Chinese pool.
        let mut records = vec![record(SourceCategory::ChineseStateMedia, 2020, 99, 2)];
        for idx in 0..3 {
            records.push(record(SourceCategory::ChineseStateMedia, 2020, idx, 50));
            records.push(record(SourceCategory::WesternMedia, 2020, idx + 10, 50));
        }
        let options = BalanceOptions {
            min_token_count: 20,
            random_seed: 42,
        };
        let result = run_balance(&options, records).unwrap();
        assert_eq!(result.audit.input_count, 7);
        assert_eq!(result.audit.filtered_count, 6);
        assert_eq!(result.audit.balanced_count, 6);
        assert_eq!(result.audit.years[0].chinese_available, 3);
    }

    #[test]
    fn every_output_record_passed_the_filter() {
        let mut records = Vec::new();
        for idx in 0..5 {
            records.push(record(SourceCategory::ChineseStateMedia, 2021, idx, 40));
            records.push(record(SourceCategory::WesternMedia, 2021, idx + 20, 40));
        }
        let options = BalanceOptions {
            min_token_count: 20,
            random_seed: 42,
        };
        let result = run_balance(&options, records).unwrap();
        for r in &result.records {
            assert!(
                r.token_count >= 20,
                "record {} has token_count {}",
                r.url,
                r.token_count
            );
        }
    }

    #[test]
    fn audit_carries_zero_sample_warnings() {
        let records = vec![
            record(SourceCategory::WesternMedia, 2024, 0, 50),
            record(SourceCategory::WesternMedia, 2024, 1, 50),
        ];
        let options = BalanceOptions {
            min_token_count: 20,
            random_seed: 42,
        };
        let result = run_balance(&options, records).unwrap();
        assert!(result.records.is_empty());
        assert_eq!(result.audit.warnings.len(), 1);
        assert_eq!(result.audit.warnings[0].year, 2024);
    }

    #[test]
    fn zero_threshold_is_valid() {
        let options = BalanceOptions {
            min_token_count: 0,
            random_seed: 42,
        };
        assert!(run_balance(&options, vec![]).is_ok());
    }
}
