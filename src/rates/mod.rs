//! Time-bounded local cache of currency exchange rates with network refresh
//! and a static offline fallback.

use std::{
    collections::HashMap,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
    time::{Duration, SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::AppConfig;
use crate::errors::Result;

/// Cache entries younger than this are served without a fetch.
const MAX_CACHE_AGE_SECS: u64 = 86_400;
const TMP_SUFFIX: &str = "tmp";

/// Fetches exchange rates relative to USD, caching them on disk for a day.
///
/// The shell uses the mapping to populate its currency list only; rates are
/// never applied to ledger arithmetic.
pub struct RateCache {
    cache_file: PathBuf,
    endpoint: String,
    timeout: Duration,
}

#[derive(Debug, Serialize, Deserialize)]
struct RatesSnapshot {
    timestamp: u64,
    rates: HashMap<String, f64>,
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    rates: HashMap<String, f64>,
}

impl RateCache {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            cache_file: config.rates_file.clone(),
            endpoint: config.rates_endpoint.clone(),
            timeout: config.http_timeout,
        }
    }

    /// Returns the current rate mapping of currency code to rate against USD.
    ///
    /// Every failure path degrades to the static fallback table; this never
    /// surfaces an error to the shell.
    pub fn get_rates(&self) -> HashMap<String, f64> {
        let now = unix_now();
        if let Some(rates) = self.cached(now) {
            debug!("serving cached exchange rates");
            return rates;
        }
        match self.fetch() {
            Ok(mut rates) => {
                rates.insert("USD".into(), 1.0);
                if let Err(err) = self.persist(now, &rates) {
                    warn!(%err, "failed to persist exchange-rate cache");
                }
                debug!(count = rates.len(), "fetched fresh exchange rates");
                rates
            }
            Err(err) => {
                warn!(%err, "exchange-rate fetch failed, serving fallback table");
                fallback_rates()
            }
        }
    }

    fn cached(&self, now: u64) -> Option<HashMap<String, f64>> {
        let data = fs::read_to_string(&self.cache_file).ok()?;
        let snapshot: RatesSnapshot = serde_json::from_str(&data).ok()?;
        if now.saturating_sub(snapshot.timestamp) < MAX_CACHE_AGE_SECS {
            Some(snapshot.rates)
        } else {
            None
        }
    }

    fn fetch(&self) -> std::result::Result<HashMap<String, f64>, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()?;
        let response: RatesResponse = client
            .get(&self.endpoint)
            .send()?
            .error_for_status()?
            .json()?;
        Ok(response.rates)
    }

    fn persist(&self, timestamp: u64, rates: &HashMap<String, f64>) -> Result<()> {
        let snapshot = RatesSnapshot {
            timestamp,
            rates: rates.clone(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        let tmp = tmp_path(&self.cache_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.cache_file)?;
        Ok(())
    }
}

/// Offline table used whenever fetch or parse fails.
pub fn fallback_rates() -> HashMap<String, f64> {
    HashMap::from([
        ("TRY".to_string(), 40.0),
        ("USD".to_string(), 1.0),
        ("EUR".to_string(), 0.9),
    ])
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
