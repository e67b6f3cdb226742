use serde::Deserialize;
use validator::Validate;

pub mod categories;
pub mod posts;
pub mod topics;

/// Variables accepted by detail and relation queries.
#[derive(Deserialize, Validate)]
pub struct IdForm {
    #[validate(range(min = 1))]
    pub id: i32,
}
