//! In-memory snapshot backend for the fincast engine.
//!
//! Holds one immutable-per-call snapshot of a user population's ledger rows
//! and answers [`LedgerReader`] queries by running the query predicate over
//! them. This is the reference backend: integration tests and embedding
//! callers that already hold their rows use it directly, while production
//! deployments put a real query engine behind the same trait.

use uuid::Uuid;

use fincast_core::{CoreError, LedgerReader, TransactionQuery};
use fincast_domain::{Budget, Category, Identifiable, Transaction};

/// Vector-backed ledger snapshot.
///
/// Reads see exactly the rows inserted before the call; there is no interior
/// mutability, so a shared reference is a consistent snapshot by
/// construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryLedger {
    transactions: Vec<Transaction>,
    budgets: Vec<Budget>,
    categories: Vec<Category>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot from pre-collected rows.
    pub fn with_rows(transactions: Vec<Transaction>, budgets: Vec<Budget>) -> Self {
        Self {
            transactions,
            budgets,
            categories: Vec::new(),
        }
    }

    pub fn insert_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id();
        self.transactions.push(transaction);
        id
    }

    pub fn insert_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id();
        self.budgets.push(budget);
        id
    }

    pub fn insert_category(&mut self, category: Category) -> Uuid {
        let id = category.id();
        self.categories.push(category);
        id
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }
}

impl LedgerReader for MemoryLedger {
    fn find_transactions(&self, query: &TransactionQuery) -> Result<Vec<Transaction>, CoreError> {
        Ok(self
            .transactions
            .iter()
            .filter(|txn| query.matches(txn))
            .cloned()
            .collect())
    }

    fn find_budget(&self, user_id: Uuid, budget_id: Uuid) -> Result<Option<Budget>, CoreError> {
        Ok(self
            .budgets
            .iter()
            .find(|budget| budget.id == budget_id && budget.user_id == user_id)
            .cloned())
    }
}
