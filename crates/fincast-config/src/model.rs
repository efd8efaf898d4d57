use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use fincast_core::ForecastConfig;
use fincast_domain::DateRange;

/// Stores user-configurable engine preferences.
///
/// Defaults mirror the conventional reporting setup: a trailing 30-day
/// summary window and a 13-week rolling forecast fed by a 30-day lookback.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default = "Config::default_summary_window_days")]
    pub summary_window_days: u32,
    #[serde(default = "Config::default_period_length_days")]
    pub period_length_days: u32,
    #[serde(default = "Config::default_period_count")]
    pub period_count: u32,
    #[serde(default = "Config::default_lookback_days")]
    pub lookback_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            summary_window_days: Self::default_summary_window_days(),
            period_length_days: Self::default_period_length_days(),
            period_count: Self::default_period_count(),
            lookback_days: Self::default_lookback_days(),
        }
    }
}

impl Config {
    pub fn default_summary_window_days() -> u32 {
        30
    }

    pub fn default_period_length_days() -> u32 {
        7
    }

    pub fn default_period_count() -> u32 {
        13
    }

    pub fn default_lookback_days() -> u32 {
        30
    }

    /// The engine-facing forecast knobs carried by this configuration.
    pub fn forecast_config(&self) -> ForecastConfig {
        ForecastConfig {
            period_length_days: self.period_length_days,
            period_count: self.period_count,
            lookback_days: self.lookback_days,
        }
    }

    /// The trailing summary window ending at `reference`.
    pub fn summary_window(&self, reference: NaiveDate) -> DateRange {
        DateRange::trailing_days(reference, self.summary_window_days)
    }
}
