//! Rolling cash-flow projection.
//!
//! The engine blends two signals: pending transactions already dated inside a
//! future period are taken as exact, while spend that has not been recorded
//! yet is approximated by a run-rate derived from recent completed expenses.
//! The projection is a running-balance chain, so it is computed as a
//! map-then-scan: every period's sums are gathered first, then the
//! opening/closing recurrence is folded strictly in period order.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use uuid::Uuid;

use fincast_domain::{DateRange, ForecastPeriod, PartitionTotals, TransactionKind};

use crate::{reader::LedgerReader, reader::TransactionQuery, CoreError};

/// Horizon and granularity knobs for the projection.
///
/// These are configuration, not constants: tests and callers with other
/// horizons supply their own values. Zero-valued lengths are treated as one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForecastConfig {
    /// Days covered by each projected period.
    pub period_length_days: u32,
    /// Number of future periods to project.
    pub period_count: u32,
    /// Trailing days of completed expenses feeding the run-rate estimate.
    pub lookback_days: u32,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            period_length_days: 7,
            period_count: 13,
            lookback_days: 30,
        }
    }
}

/// Projects future opening/closing balances from a ledger snapshot.
pub struct ForecastService;

impl ForecastService {
    /// Produces the ordered projection sequence for `config.period_count`
    /// periods starting at `reference`.
    ///
    /// Deterministic for a fixed reference date and unchanged snapshot; never
    /// reads a clock. Any reader failure aborts the whole projection, since
    /// each period depends on the prior one's closing balance.
    pub fn rolling(
        reader: &dyn LedgerReader,
        user_id: Uuid,
        reference: NaiveDate,
        config: ForecastConfig,
    ) -> Result<Vec<ForecastPeriod>, CoreError> {
        tracing::debug!(%user_id, %reference, ?config, "computing rolling forecast");

        let initial_balance = Self::historical_balance(reader, user_id, reference)?;
        let run_rate = Self::expense_run_rate(reader, user_id, reference, config)?;

        // Gather phase: per-period pending sums are independent queries.
        let period_length = i64::from(config.period_length_days.max(1));
        let mut pending_by_period = Vec::with_capacity(config.period_count as usize);
        for index in 0..i64::from(config.period_count) {
            let start = reference + Duration::days(index * period_length);
            let window = DateRange {
                start,
                end: start + Duration::days(period_length - 1),
            };
            let pending = reader.find_transactions(
                &TransactionQuery::for_user(user_id)
                    .completed(false)
                    .within(window),
            )?;
            pending_by_period.push((window, PartitionTotals::of(&pending)));
        }

        // Scan phase: the running-balance recurrence must fold in period
        // order, carrying each closing balance into the next opening.
        let mut periods = Vec::with_capacity(pending_by_period.len());
        let mut opening_balance = initial_balance;
        for (index, (window, pending)) in pending_by_period.into_iter().enumerate() {
            let cash_in = pending.total_income;
            let cash_out = pending.total_expense + run_rate;
            let closing_balance = opening_balance + cash_in - cash_out;
            periods.push(ForecastPeriod {
                period_index: index as u32 + 1,
                period_start: window.start,
                period_end: window.end,
                opening_balance,
                cash_in,
                cash_out,
                closing_balance,
            });
            opening_balance = closing_balance;
        }
        Ok(periods)
    }

    /// Net balance of all completed history up to and including `reference`.
    /// Becomes the opening balance of period 1.
    fn historical_balance(
        reader: &dyn LedgerReader,
        user_id: Uuid,
        reference: NaiveDate,
    ) -> Result<Decimal, CoreError> {
        let completed = reader.find_transactions(
            &TransactionQuery::for_user(user_id)
                .completed(true)
                .through(reference),
        )?;
        Ok(PartitionTotals::of(&completed).net_amount)
    }

    /// Average completed expense over the lookback window, scaled to one
    /// period. A quiet lookback window yields a zero run-rate, not an
    /// assumed default spend.
    fn expense_run_rate(
        reader: &dyn LedgerReader,
        user_id: Uuid,
        reference: NaiveDate,
        config: ForecastConfig,
    ) -> Result<Decimal, CoreError> {
        let lookback_days = config.lookback_days.max(1);
        let window = DateRange::trailing_days(reference, lookback_days);
        let expenses = reader.find_transactions(
            &TransactionQuery::for_user(user_id)
                .completed(true)
                .kind(TransactionKind::Expense)
                .within(window),
        )?;
        let spent: Decimal = expenses.iter().map(|txn| txn.amount).sum();
        Ok(spent / Decimal::from(lookback_days)
            * Decimal::from(config.period_length_days.max(1)))
    }
}
