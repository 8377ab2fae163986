#![doc(test(attr(deny(warnings))))]

//! Moneylog keeps a single ordered ledger of income and expense entries,
//! persists it to a JSON store, and reports balances and history through the
//! `moneylog` menu binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::from_default_env().add_directive("moneylog=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Moneylog tracing initialized.");
    });
}
