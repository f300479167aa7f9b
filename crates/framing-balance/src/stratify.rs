//! Year-stratified, category-balanced sampling.

use std::collections::BTreeMap;

use framing_core::{ArticleRecord, SourceCategory};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::types::{EmptyCellWarning, YearCell};

/// Result of one balancing pass over a filtered pool.
#[derive(Debug)]
pub struct BalanceOutcome {
    /// Balanced dataset: year-ascending, Chinese State Media before Western
    /// Media within each year, original pool order within each draw.
    pub records: Vec<ArticleRecord>,
    /// One cell per year present in either category, including dropped years.
    pub years: Vec<YearCell>,
    /// Years that contributed zero records because one category was empty.
    pub warnings: Vec<EmptyCellWarning>,
}

/// Draw a category-balanced, year-stratified sample from the filtered pool.
///
/// For every year present in either category, `n = min(count(Chinese, year),
/// count(Western, year))` records are drawn uniformly without replacement
/// from each category. One `StdRng` seeded from `seed` is shared across the
/// whole run — buckets are never reseeded, so repeated bucket shapes cannot
/// produce correlated draws. Identical input (same records, same order) and
/// the same seed always yield an identical output sequence.
///
/// A year where either category is empty contributes nothing; that is policy,
/// not an error, and is reported through `warnings`.
#[must_use]
pub fn balance(pool: &[ArticleRecord], seed: u64) -> BalanceOutcome {
    // Partition indices by (year, category). BTreeMap keeps year iteration
    // ascending and deterministic.
    let mut buckets: BTreeMap<i32, (Vec<usize>, Vec<usize>)> = BTreeMap::new();
    for (i, record) in pool.iter().enumerate() {
        let entry = buckets.entry(record.year).or_default();
        match record.category {
            SourceCategory::ChineseStateMedia => entry.0.push(i),
            SourceCategory::WesternMedia => entry.1.push(i),
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut records = Vec::new();
    let mut years = Vec::with_capacity(buckets.len());
    let mut warnings = Vec::new();

    for (year, (chinese, western)) in &buckets {
        let n = chinese.len().min(western.len());
        years.push(YearCell {
            year: *year,
            chinese_available: chinese.len(),
            western_available: western.len(),
            sampled_per_category: n,
        });

        if n == 0 {
            let warning = EmptyCellWarning {
                year: *year,
                chinese_available: chinese.len(),
                western_available: western.len(),
            };
            tracing::warn!(
                year = *year,
                chinese = chinese.len(),
                western = western.len(),
                "year contributes no records — one category is empty"
            );
            warnings.push(warning);
            continue;
        }

        for bucket in [chinese, western] {
            let mut picked: Vec<usize> = index::sample(&mut rng, bucket.len(), n).iter().collect();
            // Sort the draw so within-bucket output keeps original pool order.
            picked.sort_unstable();
            records.extend(picked.into_iter().map(|j| pool[bucket[j]].clone()));
        }

        tracing::debug!(
            year = *year,
            sampled_per_category = n,
            chinese_available = chinese.len(),
            western_available = western.len(),
            "sampled year"
        );
    }

    BalanceOutcome {
        records,
        years,
        warnings,
    }
}
