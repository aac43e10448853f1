#![doc(test(attr(deny(warnings))))]

//! Fintrack Core offers the ledger, summary, and exchange-rate primitives
//! behind the FinanceTrack desktop shell.
//!
//! The shell composes two independent components: [`core::LedgerStore`],
//! which owns the account/category/transaction tables and their backing
//! file, and [`rates::RateCache`], which supplies currency options. User
//! input arrives as untyped strings and is parsed and validated here before
//! anything is written.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod ledger;
pub mod rates;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fintrack_core=info".parse().unwrap());
        fmt().with_env_filter(filter).init();
        tracing::info!("Fintrack Core tracing initialized.");
    });
}
