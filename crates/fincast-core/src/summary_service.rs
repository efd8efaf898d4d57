//! Point-in-time income/expense aggregation.

use uuid::Uuid;

use fincast_domain::{DateRange, LedgerSummary, PartitionTotals, Transaction};

use crate::{reader::LedgerReader, reader::TransactionQuery, CoreError};

/// Computes completed/pending income and expense totals over a window.
pub struct SummaryService;

impl SummaryService {
    /// Splits an already-filtered transaction set by completion status and
    /// sums each partition. Pure; an empty set yields all-zero totals.
    pub fn aggregate(transactions: &[Transaction]) -> (PartitionTotals, PartitionTotals) {
        let completed = PartitionTotals::of(transactions.iter().filter(|txn| txn.completed));
        let pending = PartitionTotals::of(transactions.iter().filter(|txn| !txn.completed));
        (completed, pending)
    }

    /// Produces the summary report for one user over a caller-supplied
    /// window. The burn rate is derived from the completed partition.
    pub fn summarize(
        reader: &dyn LedgerReader,
        user_id: Uuid,
        window: DateRange,
    ) -> Result<LedgerSummary, CoreError> {
        tracing::debug!(%user_id, %window, "summarizing ledger window");
        let transactions =
            reader.find_transactions(&TransactionQuery::for_user(user_id).within(window))?;
        let (completed, pending) = Self::aggregate(&transactions);
        Ok(LedgerSummary {
            window,
            burn_rate: completed.burn_rate(),
            completed,
            pending,
        })
    }
}
