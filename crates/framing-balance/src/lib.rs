//! Preprocessing, filtering, and year-stratified balancing of article pools.

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod stratify;
pub mod text;
pub mod types;

pub use error::BalanceError;
pub use filter::filter_short_articles;
pub use pipeline::{run_balance, BalanceOptions, BalanceResult};
pub use stratify::{balance, BalanceOutcome};
pub use types::{BalanceAudit, EmptyCellWarning, YearCell};
