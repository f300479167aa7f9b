//! Audit types recording how the balanced dataset was produced.

use serde::{Deserialize, Serialize};

/// Per-year sampling decision: how many records each category had available
/// in the filtered pool, and how many were drawn from each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearCell {
    pub year: i32,
    pub chinese_available: usize,
    pub western_available: usize,
    /// `min(chinese_available, western_available)` — drawn from BOTH sides.
    pub sampled_per_category: usize,
}

/// A (year, category) cell that contributed zero sampled rows.
///
/// Not an error: the year is dropped from the balanced dataset by design,
/// but the decision must be surfacable for audit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyCellWarning {
    pub year: i32,
    pub chinese_available: usize,
    pub western_available: usize,
}

impl std::fmt::Display for EmptyCellWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "year {} dropped: Chinese State Media had {}, Western Media had {}",
            self.year, self.chinese_available, self.western_available
        )
    }
}

/// Full record of one balancing run, serialized alongside the dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceAudit {
    pub min_token_count: i64,
    pub random_seed: u64,
    /// Records entering the pipeline (after ingest deduplication).
    pub input_count: usize,
    /// Records surviving the token-length filter.
    pub filtered_count: usize,
    /// Records in the balanced output. Always even.
    pub balanced_count: usize,
    pub years: Vec<YearCell>,
    pub warnings: Vec<EmptyCellWarning>,
}
