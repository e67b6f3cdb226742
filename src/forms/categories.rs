use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::category::NewCategory;
use crate::domain::types::{CategoryId, TypeConstraintError};

/// Errors produced while converting category forms into payloads.
#[derive(Debug, Error)]
pub enum CategoryFormError {
    #[error("category form validation failed: {0}")]
    Validation(String),
    #[error("category form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for CategoryFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for CategoryFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

/// A blank name is allowed; the field itself must be present.
#[derive(Deserialize, Validate)]
pub struct CreateCategoryForm {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateCategoryFormPayload {
    pub name: String,
}

impl CreateCategoryFormPayload {
    pub fn into_new_category(self) -> NewCategory {
        NewCategory { name: self.name }
    }
}

impl TryFrom<CreateCategoryForm> for CreateCategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: CreateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self { name: value.name })
    }
}

#[derive(Deserialize, Validate)]
pub struct UpdateCategoryForm {
    #[validate(range(min = 1))]
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UpdateCategoryFormPayload {
    pub id: CategoryId,
    pub name: String,
}

impl TryFrom<UpdateCategoryForm> for UpdateCategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: UpdateCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: CategoryId::new(value.id)?,
            name: value.name,
        })
    }
}

#[derive(Deserialize, Validate)]
pub struct DeleteCategoryForm {
    #[validate(range(min = 1))]
    pub id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeleteCategoryFormPayload {
    pub id: CategoryId,
}

impl TryFrom<DeleteCategoryForm> for DeleteCategoryFormPayload {
    type Error = CategoryFormError;

    fn try_from(value: DeleteCategoryForm) -> Result<Self, Self::Error> {
        value.validate()?;
        Ok(Self {
            id: CategoryId::new(value.id)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_category_accepts_blank_name() {
        let form = CreateCategoryForm {
            name: String::new(),
        };

        let payload: CreateCategoryFormPayload = form.try_into().unwrap();
        assert_eq!(payload.name, "");
    }

    #[test]
    fn update_category_rejects_non_positive_id() {
        let form = UpdateCategoryForm {
            id: 0,
            name: "Tech".to_string(),
        };

        let payload: Result<UpdateCategoryFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
