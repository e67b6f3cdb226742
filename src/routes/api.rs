use actix_web::{HttpResponse, Responder, post, web};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::domain::types::{CategoryId, PostId, TopicId};
use crate::forms::IdForm;
use crate::forms::categories::{
    CreateCategoryForm, CreateCategoryFormPayload, DeleteCategoryForm, DeleteCategoryFormPayload,
    UpdateCategoryForm, UpdateCategoryFormPayload,
};
use crate::forms::posts::{
    CreatePostForm, CreatePostFormPayload, DeletePostForm, DeletePostFormPayload, UpdatePostForm,
    UpdatePostFormPayload,
};
use crate::forms::topics::{
    CreateTopicForm, CreateTopicFormPayload, DeleteTopicForm, DeleteTopicFormPayload,
    UpdateTopicForm, UpdateTopicFormPayload,
};
use crate::repository::{
    CategoryReader, CategoryWriter, DieselRepository, PostReader, PostWriter, TopicReader,
    TopicWriter,
};
use crate::services::{ServiceError, ServiceResult, categories, posts, topics};

/// Envelope accepted by the query endpoint: an operation name plus its
/// variables.
#[derive(Debug, Deserialize)]
pub struct ApiRequest {
    pub operation: String,
    #[serde(default)]
    pub variables: Value,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorEntry {
    pub message: String,
}

/// Response shape shared by every operation.
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ApiErrorEntry>,
}

impl ApiResponse {
    fn data(operation: &str, value: Value) -> Self {
        let mut data = serde_json::Map::new();
        data.insert(operation.to_string(), value);
        Self {
            data: Some(Value::Object(data)),
            errors: Vec::new(),
        }
    }

    fn error(message: String) -> Self {
        Self {
            data: None,
            errors: vec![ApiErrorEntry { message }],
        }
    }
}

/// Errors are reported in the response body; the HTTP status stays 200 so
/// that callers always receive the `{data, errors}` shape.
#[post("/graphql")]
pub async fn graphql(
    request: web::Json<ApiRequest>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let ApiRequest {
        operation,
        variables,
    } = request.into_inner();

    let response = match dispatch(&operation, variables, repo.get_ref()) {
        Ok(value) => ApiResponse::data(&operation, value),
        Err(e) => ApiResponse::error(e.to_string()),
    };

    HttpResponse::Ok().json(response)
}

fn parse_form<T: DeserializeOwned>(variables: Value) -> ServiceResult<T> {
    serde_json::from_value(variables)
        .map_err(|e| ServiceError::Form(format!("invalid variables: {e}")))
}

fn parse_id(variables: Value) -> ServiceResult<i32> {
    let form: IdForm = parse_form(variables)?;
    form.validate()
        .map_err(|e| ServiceError::Form(e.to_string()))?;
    Ok(form.id)
}

fn to_value<T: Serialize>(value: T) -> ServiceResult<Value> {
    serde_json::to_value(value).map_err(|e| {
        log::error!("Failed to serialize response: {e}");
        ServiceError::Internal
    })
}

fn dispatch<R>(operation: &str, variables: Value, repo: &R) -> ServiceResult<Value>
where
    R: CategoryReader + CategoryWriter + TopicReader + TopicWriter + PostReader + PostWriter,
{
    match operation {
        "categoryList" => to_value(categories::category_list(repo)?),
        "topicList" => to_value(topics::topic_list(repo)?),
        "postList" => to_value(posts::post_list(repo)?),
        "categoryDetailed" => {
            let id = CategoryId::new(parse_id(variables)?)?;
            to_value(categories::category_detailed(id, repo)?)
        }
        "topicDetailed" => {
            let id = TopicId::new(parse_id(variables)?)?;
            to_value(topics::topic_detailed(id, repo)?)
        }
        "postDetailed" => {
            let id = PostId::new(parse_id(variables)?)?;
            to_value(posts::post_detailed(id, repo)?)
        }
        "categoryToTopic" => {
            let id = CategoryId::new(parse_id(variables)?)?;
            to_value(topics::category_to_topic(id, repo)?)
        }
        "categoryToPost" => {
            let id = CategoryId::new(parse_id(variables)?)?;
            to_value(posts::category_to_post(id, repo)?)
        }
        "topicToPost" => {
            let id = TopicId::new(parse_id(variables)?)?;
            to_value(posts::topic_to_post(id, repo)?)
        }
        "createCategory" => {
            let form: CreateCategoryForm = parse_form(variables)?;
            let payload = CreateCategoryFormPayload::try_from(form)?;
            to_value(categories::create_category(payload, repo)?)
        }
        "updateCategory" => {
            let form: UpdateCategoryForm = parse_form(variables)?;
            let payload = UpdateCategoryFormPayload::try_from(form)?;
            to_value(categories::update_category(payload, repo)?)
        }
        "deleteCategory" => {
            let form: DeleteCategoryForm = parse_form(variables)?;
            let payload = DeleteCategoryFormPayload::try_from(form)?;
            categories::delete_category(payload, repo)?;
            Ok(Value::Null)
        }
        "createTopic" => {
            let form: CreateTopicForm = parse_form(variables)?;
            let payload = CreateTopicFormPayload::try_from(form)?;
            to_value(topics::create_topic(payload, repo)?)
        }
        "updateTopic" => {
            let form: UpdateTopicForm = parse_form(variables)?;
            let payload = UpdateTopicFormPayload::try_from(form)?;
            to_value(topics::update_topic(payload, repo)?)
        }
        "deleteTopic" => {
            let form: DeleteTopicForm = parse_form(variables)?;
            let payload = DeleteTopicFormPayload::try_from(form)?;
            topics::delete_topic(payload, repo)?;
            Ok(Value::Null)
        }
        "createPost" => {
            let form: CreatePostForm = parse_form(variables)?;
            let payload = CreatePostFormPayload::try_from(form)?;
            to_value(posts::create_post(payload, repo)?)
        }
        "updatePost" => {
            let form: UpdatePostForm = parse_form(variables)?;
            let payload = UpdatePostFormPayload::try_from(form)?;
            to_value(posts::update_post(payload, repo)?)
        }
        "deletePost" => {
            let form: DeletePostForm = parse_form(variables)?;
            let payload = DeletePostFormPayload::try_from(form)?;
            posts::delete_post(payload, repo)?;
            Ok(Value::Null)
        }
        _ => Err(ServiceError::Form(format!(
            "unknown operation: {operation}"
        ))),
    }
}
