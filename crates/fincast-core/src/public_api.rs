//! Stable, public-facing entry points that wrap the internal service layer.
//!
//! This is the surface the surrounding CRUD/HTTP layer calls. It exposes the
//! three engine operations without depending on the service structs directly.

use chrono::NaiveDate;
use uuid::Uuid;

use fincast_domain::{BudgetProgress, DateRange, ForecastPeriod, LedgerSummary};

use crate::{
    budget_service::BudgetService,
    forecast_service::{ForecastConfig, ForecastService},
    reader::LedgerReader,
    summary_service::SummaryService,
    CoreError,
};

/// Income/expense/net/burn-rate report over `window`, split by completion
/// status. The caller picks the window; a trailing-30-day report is just the
/// conventional default.
pub fn api_summarize(
    reader: &dyn LedgerReader,
    user_id: Uuid,
    window: DateRange,
) -> Result<LedgerSummary, CoreError> {
    SummaryService::summarize(reader, user_id, window)
}

/// Spend-to-date standing of the budget identified by `budget_id`.
pub fn api_budget_progress(
    reader: &dyn LedgerReader,
    user_id: Uuid,
    budget_id: Uuid,
) -> Result<BudgetProgress, CoreError> {
    BudgetService::progress(reader, user_id, budget_id)
}

/// Ordered rolling projection of `config.period_count` periods starting at
/// `reference_date`. The reference date is always explicit; the engine never
/// reads a clock.
pub fn api_forecast_rolling(
    reader: &dyn LedgerReader,
    user_id: Uuid,
    reference_date: NaiveDate,
    config: ForecastConfig,
) -> Result<Vec<ForecastPeriod>, CoreError> {
    ForecastService::rolling(reader, user_id, reference_date, config)
}
