//! fincast-core
//!
//! The financial aggregation and forecasting engine: point-in-time summaries,
//! budget consumption, and rolling cash-flow projection over a ledger
//! snapshot. Depends on fincast-domain and reads ledger data through the
//! [`reader::LedgerReader`] seam. No CLI, no HTTP, no direct storage
//! interactions.

pub mod budget_service;
pub mod error;
pub mod forecast_service;
pub mod public_api;
pub mod reader;
pub mod summary_service;

pub use budget_service::*;
pub use error::CoreError;
pub use forecast_service::*;
pub use public_api::*;
pub use reader::*;
pub use summary_service::*;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("fincast_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("fincast core tracing initialized.");
    });
}
