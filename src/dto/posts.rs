use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::post::Post;

/// Wire representation of a post.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostDto {
    pub id: i32,
    pub category_id: i32,
    pub topic_id: i32,
    pub title: String,
    pub description: String,
    pub snippet: String,
    pub created_at: NaiveDateTime,
}

impl From<Post> for PostDto {
    fn from(value: Post) -> Self {
        Self {
            id: value.id.get(),
            category_id: value.category_id.get(),
            topic_id: value.topic_id.get(),
            title: value.title,
            description: value.description,
            snippet: value.snippet.into_inner(),
            created_at: value.created_at,
        }
    }
}
