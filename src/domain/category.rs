use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::CategoryId;

/// Canonical category record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Category`].
///
/// The identifier and creation timestamp are assigned by the repository.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewCategory {
    pub name: String,
}
