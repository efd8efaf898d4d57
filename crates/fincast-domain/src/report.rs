//! Ephemeral report types emitted by the engine.
//!
//! None of these are persisted; each is recomputed from a ledger snapshot on
//! every request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{budget::Budget, common::DateRange, transaction::Transaction};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Income and expense sums for one completion partition of a transaction set.
pub struct PartitionTotals {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub net_amount: Decimal,
}

impl PartitionTotals {
    pub const ZERO: Self = Self {
        total_income: Decimal::ZERO,
        total_expense: Decimal::ZERO,
        net_amount: Decimal::ZERO,
    };

    pub fn from_sums(total_income: Decimal, total_expense: Decimal) -> Self {
        Self {
            total_income,
            total_expense,
            net_amount: total_income - total_expense,
        }
    }

    /// Sums a transaction set by kind. An empty set yields exact zeros.
    pub fn of<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for txn in transactions {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }
        Self::from_sums(income, expense)
    }

    /// Net amount relative to total expense.
    ///
    /// Defined as `1` when total expense is zero, so the rate never divides
    /// by zero and never yields infinity.
    pub fn burn_rate(&self) -> Decimal {
        if self.total_expense.is_zero() {
            Decimal::ONE
        } else {
            self.net_amount / self.total_expense
        }
    }
}

impl Default for PartitionTotals {
    fn default() -> Self {
        Self::ZERO
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Point-in-time income/expense report over a caller-supplied window,
/// split by completion status.
pub struct LedgerSummary {
    pub window: DateRange,
    pub completed: PartitionTotals,
    pub pending: PartitionTotals,
    /// Burn rate of the completed partition.
    pub burn_rate: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Spend-to-date standing of one budget.
pub struct BudgetProgress {
    pub budget_id: Uuid,
    pub budget_amount: Decimal,
    pub amount_spent: Decimal,
    /// May go negative; overspend is representable, not an error.
    pub amount_remaining: Decimal,
    /// Percentage of the ceiling consumed. A zero-amount budget is never
    /// "used", so this is `0` rather than undefined.
    pub percentage_used: Decimal,
}

impl BudgetProgress {
    pub fn from_spend(budget: &Budget, amount_spent: Decimal) -> Self {
        let percentage_used = if budget.amount > Decimal::ZERO {
            amount_spent / budget.amount * Decimal::ONE_HUNDRED
        } else {
            Decimal::ZERO
        };
        Self {
            budget_id: budget.id,
            budget_amount: budget.amount,
            amount_spent,
            amount_remaining: budget.amount - amount_spent,
            percentage_used,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One element of a rolling cash-flow projection.
///
/// Invariants across a projection sequence:
/// `closing_balance = opening_balance + cash_in - cash_out` for every period,
/// and each period's opening balance equals the previous period's closing
/// balance.
pub struct ForecastPeriod {
    /// 1-based position in the projection sequence.
    pub period_index: u32,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub opening_balance: Decimal,
    pub cash_in: Decimal,
    pub cash_out: Decimal,
    pub closing_balance: Decimal,
}

impl ForecastPeriod {
    /// The inclusive dates this period covers.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.period_start,
            end: self.period_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use super::*;
    use crate::transaction::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn empty_set_sums_to_zero_with_unit_burn_rate() {
        let totals = PartitionTotals::of([]);
        assert_eq!(totals, PartitionTotals::ZERO);
        assert_eq!(totals.burn_rate(), Decimal::ONE);
    }

    #[test]
    fn totals_split_by_kind() {
        let user = Uuid::new_v4();
        let category = Uuid::new_v4();
        let txns = vec![
            Transaction::new(user, category, dec!(900), TransactionKind::Income, date(2025, 1, 5)),
            Transaction::new(user, category, dec!(100), TransactionKind::Income, date(2025, 1, 6)),
            Transaction::new(user, category, dec!(250), TransactionKind::Expense, date(2025, 1, 7)),
        ];

        let totals = PartitionTotals::of(&txns);
        assert_eq!(totals.total_income, dec!(1000));
        assert_eq!(totals.total_expense, dec!(250));
        assert_eq!(totals.net_amount, dec!(750));
        assert_eq!(totals.burn_rate(), dec!(3));
    }

    #[test]
    fn zero_amount_transactions_still_sum_correctly() {
        // A degenerate amount that slipped past write-path validation must
        // not disturb the sums.
        let user = Uuid::new_v4();
        let category = Uuid::new_v4();
        let txns = vec![
            Transaction::new(user, category, dec!(0), TransactionKind::Expense, date(2025, 1, 5)),
            Transaction::new(user, category, dec!(40), TransactionKind::Expense, date(2025, 1, 6)),
        ];

        let totals = PartitionTotals::of(&txns);
        assert_eq!(totals.total_expense, dec!(40));
        assert_eq!(totals.net_amount, dec!(-40));
    }

    #[test]
    fn zero_amount_budget_reads_as_unused() {
        let budget = Budget::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(0),
            date(2025, 1, 1),
            date(2025, 1, 31),
        );
        let progress = BudgetProgress::from_spend(&budget, dec!(320));
        assert_eq!(progress.percentage_used, Decimal::ZERO);
        assert_eq!(progress.amount_remaining, dec!(-320));
    }

    #[test]
    fn overspend_is_representable_not_clamped() {
        let budget = Budget::new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            dec!(500),
            date(2025, 1, 1),
            date(2025, 1, 31),
        );
        let progress = BudgetProgress::from_spend(&budget, dec!(750));
        assert_eq!(progress.amount_remaining, dec!(-250));
        assert_eq!(progress.percentage_used, dec!(150));
    }
}
