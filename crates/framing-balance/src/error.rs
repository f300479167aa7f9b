use thiserror::Error;

#[derive(Debug, Error)]
pub enum BalanceError {
    #[error("minimum token count must be non-negative, got {0}")]
    InvalidThreshold(i64),
}
