use dirs::home_dir;
use std::{env, path::PathBuf};

const DEFAULT_DIR_NAME: &str = ".buku";
const HOME_ENV: &str = "BUKU_HOME";
const STORE_FILE: &str = "transactions.json";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.buku`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Default location of the JSON transaction store.
pub fn store_file() -> PathBuf {
    app_data_dir().join(STORE_FILE)
}

/// Default location of the report configuration.
pub fn config_file() -> PathBuf {
    app_data_dir().join(CONFIG_FILE)
}
