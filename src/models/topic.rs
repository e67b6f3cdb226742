use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::topic::{NewTopic as DomainNewTopic, Topic as DomainTopic};
use crate::domain::types::TypeConstraintError;

/// Diesel model representing the `topics` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::topics)]
pub struct Topic {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Topic`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::topics)]
pub struct NewTopic {
    pub category_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl NewTopic {
    /// Builds an insertable row, stamping the creation time.
    pub fn from_domain(topic: &DomainNewTopic, created_at: NaiveDateTime) -> Self {
        Self {
            category_id: topic.category_id.get(),
            name: topic.name.clone(),
            created_at,
        }
    }
}

impl TryFrom<Topic> for DomainTopic {
    type Error = TypeConstraintError;

    fn try_from(topic: Topic) -> Result<Self, Self::Error> {
        Ok(Self {
            id: topic.id.try_into()?,
            category_id: topic.category_id.try_into()?,
            name: topic.name,
            created_at: topic.created_at,
        })
    }
}
