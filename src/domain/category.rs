use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, CategoryName};

/// Canonical category record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: CategoryName,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// Data required to insert a new [`Category`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: CategoryName,
    pub created_at: NaiveDateTime,
}

impl NewCategory {
    /// Stamps a new category with the current time.
    pub fn new(name: CategoryName) -> Self {
        Self {
            name,
            created_at: Utc::now().naive_utc(),
        }
    }
}
