use thiserror::Error;

/// Error type that captures common ledger failures.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("invalid transaction index {index} (ledger holds {len} entries)")]
    InvalidIndex { index: usize, len: usize },
}

impl LedgerError {
    pub fn is_invalid_index(&self) -> bool {
        matches!(self, LedgerError::InvalidIndex { .. })
    }
}
