use crate::db::{DbConnection, DbPool};
use crate::domain::category::{Category, NewCategory};
use crate::domain::post::{NewPost, Post};
use crate::domain::topic::{NewTopic, Topic};
use crate::domain::types::{CategoryId, PostId, PostSnippet, TopicId};

pub mod category;
pub mod errors;
pub mod post;
#[cfg(test)]
pub mod test;
pub mod topic;

pub use errors::{RepositoryError, RepositoryResult};

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// List all categories in insertion order.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
    /// Retrieve a category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, assigning its id and creation time.
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category>;
    /// Replace the mutable fields of a category.
    fn update_category(&self, id: CategoryId, name: &str) -> RepositoryResult<Category>;
    /// Delete a category together with its topics and posts.
    ///
    /// Returns the total number of rows removed across the cascade.
    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize>;
}

/// Read-only operations for topic entities.
pub trait TopicReader {
    /// List all topics in insertion order.
    fn list_topics(&self) -> RepositoryResult<Vec<Topic>>;
    /// Retrieve a topic by its identifier.
    fn get_topic_by_id(&self, id: TopicId) -> RepositoryResult<Option<Topic>>;
    /// List the topics referencing a category.
    fn list_topics_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Topic>>;
}

/// Write operations for topic entities.
pub trait TopicWriter {
    /// Persist a new topic; fails with [`RepositoryError::Reference`] when
    /// the category does not exist.
    fn create_topic(&self, topic: &NewTopic) -> RepositoryResult<Topic>;
    /// Replace the mutable fields of a topic.
    fn update_topic(&self, id: TopicId, name: &str) -> RepositoryResult<Topic>;
    /// Delete a topic together with its posts.
    fn delete_topic(&self, id: TopicId) -> RepositoryResult<usize>;
}

/// Read-only operations for post entities.
pub trait PostReader {
    /// List all posts in insertion order.
    fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
    /// Retrieve a post by its identifier.
    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>>;
    /// List the posts referencing a category directly.
    fn list_posts_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Post>>;
    /// List the posts referencing a topic.
    fn list_posts_by_topic(&self, topic_id: TopicId) -> RepositoryResult<Vec<Post>>;
}

/// Write operations for post entities.
pub trait PostWriter {
    /// Persist a new post; fails with [`RepositoryError::Reference`] when
    /// the category or the topic does not exist.
    fn create_post(&self, post: &NewPost) -> RepositoryResult<Post>;
    /// Replace the mutable fields of a post.
    fn update_post(
        &self,
        id: PostId,
        title: &str,
        snippet: &PostSnippet,
        description: &str,
    ) -> RepositoryResult<Post>;
    /// Delete a post.
    fn delete_post(&self, id: PostId) -> RepositoryResult<usize>;
}
