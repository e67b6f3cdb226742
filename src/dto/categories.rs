use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::category::Category;

/// Wire representation of a category.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDto {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self {
            id: value.id.get(),
            name: value.name,
            created_at: value.created_at,
        }
    }
}
