//! fincast-config
//!
//! User-facing engine configuration: the reporting window and forecast
//! horizon knobs, persisted as JSON under a per-user base directory.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
