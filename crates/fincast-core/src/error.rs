use thiserror::Error;
use uuid::Uuid;

/// Failures the engine can surface to its caller.
///
/// Query failures abort the whole requested computation; nothing is retried
/// here, and no partial result is ever returned.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Budget not found: {0}")]
    BudgetNotFound(Uuid),
    #[error("Ledger query failed: {0}")]
    DataSource(String),
}
