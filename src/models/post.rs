use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::post::{NewPost as DomainNewPost, Post as DomainPost};
use crate::domain::types::{PostSnippet, TypeConstraintError};

/// Diesel model representing the `posts` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::posts)]
pub struct Post {
    pub id: i32,
    pub category_id: i32,
    pub topic_id: i32,
    pub title: String,
    pub description: String,
    pub snippet: String,
    pub created_at: NaiveDateTime,
}

/// Insertable form of [`Post`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::posts)]
pub struct NewPost {
    pub category_id: i32,
    pub topic_id: i32,
    pub title: String,
    pub description: String,
    pub snippet: String,
    pub created_at: NaiveDateTime,
}

impl NewPost {
    /// Builds an insertable row, stamping the creation time.
    pub fn from_domain(post: &DomainNewPost, created_at: NaiveDateTime) -> Self {
        Self {
            category_id: post.category_id.get(),
            topic_id: post.topic_id.get(),
            title: post.title.clone(),
            description: post.description.clone(),
            snippet: post.snippet.as_str().to_string(),
            created_at,
        }
    }
}

impl TryFrom<Post> for DomainPost {
    type Error = TypeConstraintError;

    fn try_from(post: Post) -> Result<Self, Self::Error> {
        Ok(Self {
            id: post.id.try_into()?,
            category_id: post.category_id.try_into()?,
            topic_id: post.topic_id.try_into()?,
            title: post.title,
            description: post.description,
            snippet: PostSnippet::new(post.snippet)?,
            created_at: post.created_at,
        })
    }
}
