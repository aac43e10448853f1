use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use fintrack_core::{
    config::AppConfig,
    rates::{fallback_rates, RateCache},
};
use tempfile::TempDir;

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before unix epoch")
        .as_secs()
}

/// Config whose endpoint no fetch can ever reach, so network behavior is
/// deterministic offline.
fn offline_config() -> (AppConfig, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let mut config = AppConfig::with_data_dir(temp.path());
    config.rates_endpoint = "http://127.0.0.1:9/latest?from=USD".into();
    fs::create_dir_all(&config.data_dir).unwrap();
    (config, temp)
}

#[test]
fn fresh_cache_is_served_without_fetching() {
    let (config, _guard) = offline_config();
    let cache_body = format!(
        r#"{{"timestamp": {}, "rates": {{"EUR": 0.5, "TRY": 33.0}}}}"#,
        unix_now()
    );
    fs::write(&config.rates_file, cache_body).unwrap();

    let rates = RateCache::new(&config).get_rates();
    assert_eq!(rates.len(), 2);
    assert_eq!(rates["EUR"], 0.5);
    assert_eq!(rates["TRY"], 33.0);
}

#[test]
fn stale_cache_forces_a_refetch_attempt() {
    let (config, _guard) = offline_config();
    let stale = unix_now() - 90_000;
    let cache_body = format!(r#"{{"timestamp": {}, "rates": {{"EUR": 0.5}}}}"#, stale);
    fs::write(&config.rates_file, &cache_body).unwrap();

    // Over 24h old: the cached value must not come back. The endpoint is
    // unreachable, so the exact fallback table is served instead and the
    // cache file is left as it was.
    let rates = RateCache::new(&config).get_rates();
    assert_eq!(rates, fallback_rates());
    assert_eq!(fs::read_to_string(&config.rates_file).unwrap(), cache_body);
}

#[test]
fn missing_cache_and_failed_fetch_serve_the_fallback() {
    let (config, _guard) = offline_config();
    let rates = RateCache::new(&config).get_rates();
    assert_eq!(rates, fallback_rates());
    assert!(
        !config.rates_file.exists(),
        "a failed fetch must not write the cache file"
    );
}

#[test]
fn fallback_mapping_matches_the_offline_table() {
    let rates = fallback_rates();
    assert_eq!(rates["TRY"], 40.0);
    assert_eq!(rates["USD"], 1.0);
    assert_eq!(rates["EUR"], 0.9);
    assert_eq!(rates.len(), 3);
}
