//! Domain model for dated, typed money movements.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// A single money movement recorded against a category.
///
/// The engine only ever reads transactions; creation and amendment are owned
/// by the surrounding CRUD layer. Amounts are non-negative by that layer's
/// contract, with direction carried by [`TransactionKind`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category_id: Uuid,
    pub amount: Decimal,
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(
        user_id: Uuid,
        category_id: Uuid,
        amount: Decimal,
        kind: TransactionKind,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category_id,
            amount,
            kind,
            date,
            completed: false,
            client: None,
            note: None,
        }
    }

    pub fn with_client(mut self, client: impl Into<String>) -> Self {
        self.client = Some(client.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Marks the movement as settled rather than expected.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl BelongsToCategory for Transaction {
    fn category_id(&self) -> Uuid {
        self.category_id
    }
}

impl Amounted for Transaction {
    fn amount(&self) -> Decimal {
        self.amount
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} {} {} on {}", self.id, self.kind, self.amount, self.date)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
/// Direction of a money movement.
pub enum TransactionKind {
    Income,
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Income => "Income",
            TransactionKind::Expense => "Expense",
        };
        f.write_str(label)
    }
}
