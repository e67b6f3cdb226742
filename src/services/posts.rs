use crate::domain::types::{CategoryId, PostId, TopicId};
use crate::dto::posts::PostDto;
use crate::forms::posts::{CreatePostFormPayload, DeletePostFormPayload, UpdatePostFormPayload};
use crate::repository::{PostReader, PostWriter, RepositoryError};

use super::{ServiceError, ServiceResult};

pub fn post_list<R>(repo: &R) -> ServiceResult<Vec<PostDto>>
where
    R: PostReader,
{
    match repo.list_posts() {
        Ok(posts) => Ok(posts.into_iter().map(PostDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn post_detailed<R>(id: PostId, repo: &R) -> ServiceResult<PostDto>
where
    R: PostReader,
{
    match repo.get_post_by_id(id) {
        Ok(Some(post)) => Ok(post.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Posts referencing a category directly; an unknown category yields an
/// empty list.
pub fn category_to_post<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Vec<PostDto>>
where
    R: PostReader,
{
    match repo.list_posts_by_category(category_id) {
        Ok(posts) => Ok(posts.into_iter().map(PostDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list posts for category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Posts belonging to a topic; an unknown topic yields an empty list.
pub fn topic_to_post<R>(topic_id: TopicId, repo: &R) -> ServiceResult<Vec<PostDto>>
where
    R: PostReader,
{
    match repo.list_posts_by_topic(topic_id) {
        Ok(posts) => Ok(posts.into_iter().map(PostDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list posts for topic {topic_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_post<R>(payload: CreatePostFormPayload, repo: &R) -> ServiceResult<PostDto>
where
    R: PostWriter,
{
    match repo.create_post(&payload.into_new_post()) {
        Ok(post) => Ok(post.into()),
        Err(e @ RepositoryError::Reference(_)) => Err(ServiceError::Reference(e.to_string())),
        Err(e) => {
            log::error!("Failed to create post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_post<R>(payload: UpdatePostFormPayload, repo: &R) -> ServiceResult<PostDto>
where
    R: PostWriter,
{
    match repo.update_post(
        payload.id,
        &payload.title,
        &payload.snippet,
        &payload.description,
    ) {
        Ok(post) => Ok(post.into()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update post: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_post<R>(payload: DeletePostFormPayload, repo: &R) -> ServiceResult<()>
where
    R: PostWriter,
{
    match repo.delete_post(payload.id) {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete post: {e}");
            Err(ServiceError::Internal)
        }
    }
}
