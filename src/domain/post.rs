use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{CategoryId, PostId, PostSnippet, TopicId};

/// Canonical post record.
///
/// The category and topic references are independent foreign keys; a post's
/// topic is not required to belong to the post's category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Post {
    pub id: PostId,
    pub category_id: CategoryId,
    pub topic_id: TopicId,
    pub title: String,
    pub description: String,
    pub snippet: PostSnippet,
    pub created_at: NaiveDateTime,
}

/// Data required to insert a new [`Post`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewPost {
    pub category_id: CategoryId,
    pub topic_id: TopicId,
    pub title: String,
    pub description: String,
    pub snippet: PostSnippet,
}
