//! Process-wide configuration, built once at startup and handed to each
//! component's constructor.

use std::{path::PathBuf, time::Duration};

use dirs::home_dir;

const DEFAULT_DIR_NAME: &str = ".fintrack";
const LEDGER_FILE: &str = "finance_data.json";
const RATES_FILE: &str = "rates_cache.json";
const RATES_ENDPOINT: &str = "https://api.frankfurter.app/latest?from=USD";
const HTTP_TIMEOUT_SECS: u64 = 10;

/// Resolved file locations and network settings for one app instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub ledger_file: PathBuf,
    pub rates_file: PathBuf,
    pub rates_endpoint: String,
    pub http_timeout: Duration,
}

impl AppConfig {
    /// Builds a configuration rooted at `data_dir`.
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            ledger_file: data_dir.join(LEDGER_FILE),
            rates_file: data_dir.join(RATES_FILE),
            rates_endpoint: RATES_ENDPOINT.into(),
            http_timeout: Duration::from_secs(HTTP_TIMEOUT_SECS),
            data_dir,
        }
    }
}

impl Default for AppConfig {
    /// Roots the application data directory under `~/.fintrack`.
    fn default() -> Self {
        let home = home_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::with_data_dir(home.join(DEFAULT_DIR_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_data_dir() {
        let config = AppConfig::with_data_dir("/tmp/fintrack-test");
        assert_eq!(config.ledger_file.parent(), Some(config.data_dir.as_path()));
        assert_eq!(config.rates_file.parent(), Some(config.data_dir.as_path()));
    }
}
