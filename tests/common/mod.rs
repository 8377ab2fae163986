use std::path::PathBuf;
use std::sync::Mutex;

use moneylog::{core::LedgerManager, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a manager backed by a unique store file for each test, returning
/// the store path so tests can inspect what was persisted.
pub fn setup_manager() -> (LedgerManager, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let store = temp.path().join("transactions.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let manager = LedgerManager::open(Box::new(JsonStorage::new(store.clone())))
        .expect("open manager on empty store");
    (manager, store)
}

/// Reopens a manager on an existing store path.
pub fn reopen_manager(store: &PathBuf) -> LedgerManager {
    LedgerManager::open(Box::new(JsonStorage::new(store.clone()))).expect("reopen manager")
}
