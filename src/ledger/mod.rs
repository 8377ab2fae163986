mod ledger;
mod transaction;

pub use ledger::{Ledger, WipeConfirmation};
pub use transaction::{Transaction, TransactionKind};
