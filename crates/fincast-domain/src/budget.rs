//! Domain model for category spending ceilings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A spending ceiling for one category over one inclusive date interval.
///
/// Read-only to the engine; record ownership lies with the CRUD layer, which
/// guarantees `start_date <= end_date` and a non-negative amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Budget {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub amount: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Budget {
    pub fn new(
        user_id: Uuid,
        category_id: Uuid,
        amount: Decimal,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            amount,
            start_date,
            end_date,
        }
    }

    /// The inclusive interval the ceiling applies to.
    pub fn range(&self) -> DateRange {
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.range().contains(date)
    }
}

impl Identifiable for Budget {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for Budget {
    fn category_id(&self) -> Uuid {
        self.category_id
    }
}

impl Amounted for Budget {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for Budget {
    fn display_label(&self) -> String {
        format!("budget:{} {} over {}", self.id, self.amount, self.range())
    }
}
