use std::sync::Mutex;

use fintrack_core::{config::AppConfig, core::LedgerStore, storage::JsonStorage};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates an isolated, initialized store backed by a unique directory.
pub fn setup_store() -> (LedgerStore, AppConfig) {
    let temp = TempDir::new().expect("create temp dir");
    let config = AppConfig::with_data_dir(temp.path());
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = LedgerStore::new(Box::new(JsonStorage::new(config.ledger_file.clone())));
    store.initialize().expect("initialize backing store");
    (store, config)
}
