use crate::{
    errors::LedgerError,
    ledger::{Ledger, Transaction, WipeConfirmation},
    storage::StorageBackend,
};

/// Facade that coordinates ledger state and persistence.
///
/// Every successful mutation immediately rewrites the backing store so the
/// in-memory and on-disk sequences stay consistent within the process. A
/// failed mutation (out-of-range delete, declined wipe) never touches the
/// store.
pub struct LedgerManager {
    ledger: Ledger,
    storage: Box<dyn StorageBackend>,
}

impl LedgerManager {
    /// Loads the persisted ledger through `storage`. A missing store yields
    /// an empty ledger; an unreadable or unparsable store is a startup
    /// failure and propagates.
    pub fn open(storage: Box<dyn StorageBackend>) -> Result<Self, LedgerError> {
        let entries = storage.load()?;
        tracing::info!(entries = entries.len(), "ledger loaded");
        Ok(Self {
            ledger: Ledger::from_entries(entries),
            storage,
        })
    }

    pub fn add_income(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.ledger.add_income(amount, description);
        tracing::info!(amount, "income recorded");
        self.persist()
    }

    pub fn add_expense(
        &mut self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.ledger.add_expense(amount, description);
        tracing::info!(amount, "expense recorded");
        self.persist()
    }

    /// Deletes the entry at the zero-based `index` and returns the removed
    /// record for display. `InvalidIndex` is reported before anything is
    /// written.
    pub fn delete_at(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        let removed = self.ledger.remove_at(index)?;
        self.persist()?;
        tracing::info!(index, kind = %removed.kind, "transaction deleted");
        Ok(removed)
    }

    /// Clears the whole ledger when (and only when) the caller supplies an
    /// affirmative [`WipeConfirmation`]. Returns whether the wipe ran.
    pub fn delete_all(&mut self, confirmation: WipeConfirmation) -> Result<bool, LedgerError> {
        if !self.ledger.wipe(confirmation) {
            return Ok(false);
        }
        self.persist()?;
        tracing::info!("all transactions deleted");
        Ok(true)
    }

    pub fn balance(&self) -> f64 {
        self.ledger.balance()
    }

    /// Restartable listing of `(position, transaction)` pairs.
    pub fn transactions(&self) -> impl Iterator<Item = (usize, &Transaction)> {
        self.ledger.entries()
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    fn persist(&self) -> Result<(), LedgerError> {
        self.storage.save(self.ledger.as_slice())
    }
}
