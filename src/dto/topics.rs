use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::topic::Topic;

/// Wire representation of a topic.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopicDto {
    pub id: i32,
    pub category_id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<Topic> for TopicDto {
    fn from(value: Topic) -> Self {
        Self {
            id: value.id.get(),
            category_id: value.category_id.get(),
            name: value.name,
            created_at: value.created_at,
        }
    }
}
