use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::topic::NewTopic;
use crate::domain::types::{CategoryId, TopicId, TypeConstraintError};

/// Errors produced while converting topic forms into payloads.
#[derive(Debug, Error)]
pub enum TopicFormError {
    #[error("topic form validation failed: {0}")]
    Validation(String),
    #[error("topic form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for TopicFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for TopicFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTopicForm {
    #[validate(range(min = 1))]
    pub category_id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTopicFormPayload {
    pub category_id: CategoryId,
    pub name: String,
}

impl CreateTopicFormPayload {
    pub fn into_new_topic(self) -> NewTopic {
        NewTopic {
            category_id: self.category_id,
            name: self.name,
        }
    }
}

impl TryFrom<CreateTopicForm> for CreateTopicFormPayload {
    type Error = TopicFormError;

    fn try_from(value: CreateTopicForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            category_id: CategoryId::new(value.category_id)?,
            name: value.name,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateTopicForm {
    #[validate(range(min = 1))]
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateTopicFormPayload {
    pub id: TopicId,
    pub name: String,
}

impl TryFrom<UpdateTopicForm> for UpdateTopicFormPayload {
    type Error = TopicFormError;

    fn try_from(value: UpdateTopicForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: TopicId::new(value.id)?,
            name: value.name,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteTopicForm {
    #[validate(range(min = 1))]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteTopicFormPayload {
    pub id: TopicId,
}

impl TryFrom<DeleteTopicForm> for DeleteTopicFormPayload {
    type Error = TopicFormError;

    fn try_from(value: DeleteTopicForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: TopicId::new(value.id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_topic_requires_positive_category_id() {
        let form = CreateTopicForm {
            category_id: 0,
            name: "AI".to_string(),
        };

        let payload: Result<CreateTopicFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn create_topic_builds_new_topic() {
        let form = CreateTopicForm {
            category_id: 3,
            name: "AI".to_string(),
        };

        let payload: CreateTopicFormPayload = form.try_into().unwrap();
        let topic = payload.into_new_topic();
        assert_eq!(topic.category_id, 3);
        assert_eq!(topic.name, "AI");
    }
}
