use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminates the two entry flavours the ledger records.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => write!(f, "Income"),
            TransactionKind::Expense => write!(f, "Expense"),
        }
    }
}

/// A single income or expense record.
///
/// The signed `amount` carries the whole semantics: income is stored
/// positive, expenses are stored negated, so the ledger balance is a plain
/// sum. The serialized field names match the store layout (`type`, `amount`,
/// `description`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub description: String,
}

impl Transaction {
    pub fn income(amount: f64, description: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Income,
            amount,
            description: description.into(),
        }
    }

    pub fn expense(amount: f64, description: impl Into<String>) -> Self {
        Self {
            kind: TransactionKind::Expense,
            amount: -amount,
            description: description.into(),
        }
    }
}
