use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, TopicId};

/// Canonical topic record belonging to a category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Topic {
    pub id: TopicId,
    pub category_id: CategoryId,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Topic`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewTopic {
    pub category_id: CategoryId,
    pub name: String,
}
