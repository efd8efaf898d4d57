//! Domain type for transaction categories.
//!
//! Inside the engine a category is only a filter key; full record ownership
//! (descriptions, timestamps, uniqueness) lies with the CRUD layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::*;

/// Names a bucket that transactions and budgets are filed under.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Category {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.id)
    }
}
