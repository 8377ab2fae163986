use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;

use super::transaction::Transaction;

/// Explicit confirmation token demanded by [`Ledger::wipe`].
///
/// Destructive bulk deletion only runs when the caller hands over `Confirmed`;
/// how that answer was obtained (interactive prompt, script argument) is the
/// caller's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WipeConfirmation {
    Confirmed,
    Declined,
}

impl WipeConfirmation {
    pub fn from_answer(affirmative: bool) -> Self {
        if affirmative {
            WipeConfirmation::Confirmed
        } else {
            WipeConfirmation::Declined
        }
    }
}

/// The ordered transaction sequence. Insertion order is significant: the
/// position shown to users is `index + 1`, and deleting shifts later entries
/// down by one. Entries are only appended or removed, never edited in place.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: Vec<Transaction>) -> Self {
        Self { entries }
    }

    pub fn add_income(&mut self, amount: f64, description: impl Into<String>) {
        self.entries.push(Transaction::income(amount, description));
    }

    pub fn add_expense(&mut self, amount: f64, description: impl Into<String>) {
        self.entries.push(Transaction::expense(amount, description));
    }

    /// Removes the entry at the zero-based `index` and returns it so callers
    /// can report what was deleted. Out-of-range indexes leave the ledger
    /// untouched.
    pub fn remove_at(&mut self, index: usize) -> Result<Transaction, LedgerError> {
        if index >= self.entries.len() {
            return Err(LedgerError::InvalidIndex {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Clears every entry, but only when `confirmation` is affirmative.
    /// Returns whether the wipe actually happened.
    pub fn wipe(&mut self, confirmation: WipeConfirmation) -> bool {
        match confirmation {
            WipeConfirmation::Confirmed => {
                self.entries.clear();
                true
            }
            WipeConfirmation::Declined => false,
        }
    }

    /// Signed sum of all stored amounts. Zero for an empty ledger.
    pub fn balance(&self) -> f64 {
        // An explicit 0.0 seed: `Sum for f64` folds from -0.0, which would
        // make an empty ledger format as "-0.00".
        self.entries
            .iter()
            .map(|txn| txn.amount)
            .fold(0.0, |acc, amount| acc + amount)
    }

    /// Restartable iteration over `(position, transaction)` in insertion
    /// order.
    pub fn entries(&self) -> impl Iterator<Item = (usize, &Transaction)> {
        self.entries.iter().enumerate()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn as_slice(&self) -> &[Transaction] {
        &self.entries
    }
}
