use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::post::NewPost;
use crate::domain::types::{CategoryId, PostId, PostSnippet, TopicId, TypeConstraintError};

/// Errors produced while converting post forms into payloads.
#[derive(Debug, Error)]
pub enum PostFormError {
    #[error("post form validation failed: {0}")]
    Validation(String),
    #[error("post form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for PostFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for PostFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// Title and description may be blank; the snippet must not be.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    #[validate(range(min = 1))]
    pub topic_id: i32,
    pub title: String,
    #[validate(length(min = 1))]
    pub snippet: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePostFormPayload {
    pub category_id: CategoryId,
    pub topic_id: TopicId,
    pub title: String,
    pub snippet: PostSnippet,
    pub description: String,
}

impl CreatePostFormPayload {
    pub fn into_new_post(self) -> NewPost {
        NewPost {
            category_id: self.category_id,
            topic_id: self.topic_id,
            title: self.title,
            description: self.description,
            snippet: self.snippet,
        }
    }
}

impl TryFrom<CreatePostForm> for CreatePostFormPayload {
    type Error = PostFormError;

    fn try_from(value: CreatePostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
            topic_id: TopicId::new(value.topic_id)?,
            title: value.title,
            snippet: PostSnippet::new(value.snippet)?,
            description: value.description,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdatePostForm {
    #[validate(range(min = 1))]
    pub id: i32,
    pub title: String,
    #[validate(length(min = 1))]
    pub snippet: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePostFormPayload {
    pub id: PostId,
    pub title: String,
    pub snippet: PostSnippet,
    pub description: String,
}

impl TryFrom<UpdatePostForm> for UpdatePostFormPayload {
    type Error = PostFormError;

    fn try_from(value: UpdatePostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: PostId::new(value.id)?,
            title: value.title,
            snippet: PostSnippet::new(value.snippet)?,
            description: value.description,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeletePostForm {
    #[validate(range(min = 1))]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeletePostFormPayload {
    pub id: PostId,
}

impl TryFrom<DeletePostForm> for DeletePostFormPayload {
    type Error = PostFormError;

    fn try_from(value: DeletePostForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: PostId::new(value.id)?,
        })
    }
}
