pub mod json_backend;

use crate::{errors::LedgerError, ledger::Transaction};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends capable of storing the transaction
/// sequence. The whole sequence is rewritten on every save; there is no
/// incremental persistence.
pub trait StorageBackend: Send + Sync {
    fn save(&self, transactions: &[Transaction]) -> Result<()>;
    fn load(&self) -> Result<Vec<Transaction>>;
}

pub use json_backend::JsonStorage;
