//! The ledger reader seam.
//!
//! The engine never talks to a concrete store; it describes what it wants
//! with a [`TransactionQuery`] and lets the backend answer from whatever
//! query machinery it has. Every call must answer from one consistent
//! snapshot of committed state.

use chrono::NaiveDate;
use uuid::Uuid;

use fincast_domain::{Budget, DateRange, Transaction, TransactionKind};

use crate::CoreError;

/// Filter description for one snapshot query.
///
/// All filters beyond the owning user are optional; an unset filter matches
/// everything. Date bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionQuery {
    pub user_id: Uuid,
    pub from: Option<NaiveDate>,
    pub until: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub completed: Option<bool>,
    pub category_id: Option<Uuid>,
}

impl TransactionQuery {
    /// Starts an unconstrained query over one user's transactions.
    pub fn for_user(user_id: Uuid) -> Self {
        Self {
            user_id,
            from: None,
            until: None,
            kind: None,
            completed: None,
            category_id: None,
        }
    }

    /// Restricts matches to an inclusive date range.
    pub fn within(mut self, range: DateRange) -> Self {
        self.from = Some(range.start);
        self.until = Some(range.end);
        self
    }

    /// Restricts matches to dates at or before `end`, unbounded below.
    pub fn through(mut self, end: NaiveDate) -> Self {
        self.until = Some(end);
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn category(mut self, category_id: Uuid) -> Self {
        self.category_id = Some(category_id);
        self
    }

    /// Evaluates the filter against one transaction. Snapshot backends can
    /// answer queries by running this predicate over their rows.
    pub fn matches(&self, txn: &Transaction) -> bool {
        if txn.user_id != self.user_id {
            return false;
        }
        if self.from.is_some_and(|from| txn.date < from) {
            return false;
        }
        if self.until.is_some_and(|until| txn.date > until) {
            return false;
        }
        if self.kind.is_some_and(|kind| txn.kind != kind) {
            return false;
        }
        if self.completed.is_some_and(|flag| txn.completed != flag) {
            return false;
        }
        if self.category_id.is_some_and(|id| txn.category_id != id) {
            return false;
        }
        true
    }
}

/// Read-only access to the ledger the engine computes over.
///
/// Implementations answer each call from a consistent snapshot of committed
/// state. Retry policy, if any, belongs behind this trait, never inside the
/// engine.
pub trait LedgerReader: Send + Sync {
    /// Returns every transaction matching the filter.
    fn find_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, CoreError>;

    /// Looks up one budget by id, scoped to its owner. Absence is data, not
    /// an error; the service layer decides what absence means.
    fn find_budget(&self, user_id: Uuid, budget_id: Uuid) -> Result<Option<Budget>, CoreError>;
}
