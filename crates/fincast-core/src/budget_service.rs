//! Budget consumption over a budget's own category and date range.

use rust_decimal::Decimal;
use uuid::Uuid;

use fincast_domain::{BudgetProgress, TransactionKind};

use crate::{reader::LedgerReader, reader::TransactionQuery, CoreError};

/// Computes spend-to-date against one budget's ceiling.
pub struct BudgetService;

impl BudgetService {
    /// Reports how much of the budget's ceiling has been consumed by expense
    /// transactions in its category over its inclusive date range.
    ///
    /// Fails with [`CoreError::BudgetNotFound`] when the budget is absent or
    /// not owned by `user_id`.
    pub fn progress(
        reader: &dyn LedgerReader,
        user_id: Uuid,
        budget_id: Uuid,
    ) -> Result<BudgetProgress, CoreError> {
        let budget = reader
            .find_budget(user_id, budget_id)?
            .ok_or(CoreError::BudgetNotFound(budget_id))?;

        let query = TransactionQuery::for_user(user_id)
            .category(budget.category_id)
            .kind(TransactionKind::Expense)
            .within(budget.range());
        let expenses = reader.find_transactions(&query)?;
        let amount_spent: Decimal = expenses.iter().map(|txn| txn.amount).sum();

        tracing::debug!(%budget_id, %amount_spent, "computed budget progress");
        Ok(BudgetProgress::from_spend(&budget, amount_spent))
    }
}
