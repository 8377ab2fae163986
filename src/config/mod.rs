use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".moneylog";
const STORE_FILE: &str = "transactions.json";
const HOME_ENV: &str = "MONEYLOG_HOME";

/// Returns the application data directory, defaulting to `~/.moneylog`.
/// `MONEYLOG_HOME` overrides the location (tests point it at a temp dir).
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Absolute path of the transactions store.
pub fn store_file() -> PathBuf {
    app_data_dir().join(STORE_FILE)
}
