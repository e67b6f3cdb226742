use std::sync::Mutex;

use chrono::Utc;

use crate::domain::category::{Category, NewCategory};
use crate::domain::post::{NewPost, Post};
use crate::domain::topic::{NewTopic, Topic};
use crate::domain::types::{CategoryId, PostId, PostSnippet, TopicId};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{
    CategoryReader, CategoryWriter, PostReader, PostWriter, TopicReader, TopicWriter,
};

/// Simple in-memory repository used for unit tests.
///
/// Mirrors the referential behavior of the Diesel implementation: inserts
/// verify parents, deletes cascade, updates leave id and creation time
/// untouched.
#[derive(Default)]
pub struct TestRepository {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    categories: Vec<Category>,
    topics: Vec<Topic>,
    posts: Vec<Post>,
}

impl State {
    fn next_category_id(&self) -> CategoryId {
        let max = self.categories.iter().map(|c| c.id.get()).max().unwrap_or(0);
        CategoryId::new(max + 1).unwrap()
    }

    fn next_topic_id(&self) -> TopicId {
        let max = self.topics.iter().map(|t| t.id.get()).max().unwrap_or(0);
        TopicId::new(max + 1).unwrap()
    }

    fn next_post_id(&self) -> PostId {
        let max = self.posts.iter().map(|p| p.id.get()).max().unwrap_or(0);
        PostId::new(max + 1).unwrap()
    }
}

impl TestRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        self.state.lock().unwrap().categories = categories;
        self
    }

    pub fn with_topics(self, topics: Vec<Topic>) -> Self {
        self.state.lock().unwrap().topics = topics;
        self
    }

    pub fn with_posts(self, posts: Vec<Post>) -> Self {
        self.state.lock().unwrap().posts = posts;
        self
    }
}

impl CategoryReader for TestRepository {
    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        Ok(self.state.lock().unwrap().categories.clone())
    }

    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .categories
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }
}

impl CategoryWriter for TestRepository {
    fn create_category(&self, category: &NewCategory) -> RepositoryResult<Category> {
        let mut state = self.state.lock().unwrap();
        let created = Category {
            id: state.next_category_id(),
            name: category.name.clone(),
            created_at: Utc::now().naive_utc(),
        };
        state.categories.push(created.clone());
        Ok(created)
    }

    fn update_category(&self, id: CategoryId, name: &str) -> RepositoryResult<Category> {
        let mut state = self.state.lock().unwrap();
        let category = state
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(RepositoryError::NotFound)?;
        category.name = name.to_string();
        Ok(category.clone())
    }

    fn delete_category(&self, id: CategoryId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.iter().any(|c| c.id == id) {
            return Err(RepositoryError::NotFound);
        }

        let topic_ids: Vec<TopicId> = state
            .topics
            .iter()
            .filter(|t| t.category_id == id)
            .map(|t| t.id)
            .collect();

        let posts_before = state.posts.len();
        state
            .posts
            .retain(|p| p.category_id != id && !topic_ids.contains(&p.topic_id));
        let topics_before = state.topics.len();
        state.topics.retain(|t| t.category_id != id);
        state.categories.retain(|c| c.id != id);

        Ok((posts_before - state.posts.len()) + (topics_before - state.topics.len()) + 1)
    }
}

impl TopicReader for TestRepository {
    fn list_topics(&self) -> RepositoryResult<Vec<Topic>> {
        Ok(self.state.lock().unwrap().topics.clone())
    }

    fn get_topic_by_id(&self, id: TopicId) -> RepositoryResult<Option<Topic>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .topics
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    fn list_topics_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Topic>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .topics
            .iter()
            .filter(|t| t.category_id == category_id)
            .cloned()
            .collect())
    }
}

impl TopicWriter for TestRepository {
    fn create_topic(&self, topic: &NewTopic) -> RepositoryResult<Topic> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.iter().any(|c| c.id == topic.category_id) {
            return Err(RepositoryError::Reference("category"));
        }
        let created = Topic {
            id: state.next_topic_id(),
            category_id: topic.category_id,
            name: topic.name.clone(),
            created_at: Utc::now().naive_utc(),
        };
        state.topics.push(created.clone());
        Ok(created)
    }

    fn update_topic(&self, id: TopicId, name: &str) -> RepositoryResult<Topic> {
        let mut state = self.state.lock().unwrap();
        let topic = state
            .topics
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(RepositoryError::NotFound)?;
        topic.name = name.to_string();
        Ok(topic.clone())
    }

    fn delete_topic(&self, id: TopicId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if !state.topics.iter().any(|t| t.id == id) {
            return Err(RepositoryError::NotFound);
        }

        let posts_before = state.posts.len();
        state.posts.retain(|p| p.topic_id != id);
        state.topics.retain(|t| t.id != id);

        Ok((posts_before - state.posts.len()) + 1)
    }
}

impl PostReader for TestRepository {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self.state.lock().unwrap().posts.clone())
    }

    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    fn list_posts_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect())
    }

    fn list_posts_by_topic(&self, topic_id: TopicId) -> RepositoryResult<Vec<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .filter(|p| p.topic_id == topic_id)
            .cloned()
            .collect())
    }
}

impl PostWriter for TestRepository {
    fn create_post(&self, post: &NewPost) -> RepositoryResult<Post> {
        let mut state = self.state.lock().unwrap();
        if !state.categories.iter().any(|c| c.id == post.category_id) {
            return Err(RepositoryError::Reference("category"));
        }
        if !state.topics.iter().any(|t| t.id == post.topic_id) {
            return Err(RepositoryError::Reference("topic"));
        }
        let created = Post {
            id: state.next_post_id(),
            category_id: post.category_id,
            topic_id: post.topic_id,
            title: post.title.clone(),
            description: post.description.clone(),
            snippet: post.snippet.clone(),
            created_at: Utc::now().naive_utc(),
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    fn update_post(
        &self,
        id: PostId,
        title: &str,
        snippet: &PostSnippet,
        description: &str,
    ) -> RepositoryResult<Post> {
        let mut state = self.state.lock().unwrap();
        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(RepositoryError::NotFound)?;
        post.title = title.to_string();
        post.snippet = snippet.clone();
        post.description = description.to_string();
        Ok(post.clone())
    }

    fn delete_post(&self, id: PostId) -> RepositoryResult<usize> {
        let mut state = self.state.lock().unwrap();
        if !state.posts.iter().any(|p| p.id == id) {
            return Err(RepositoryError::NotFound);
        }
        state.posts.retain(|p| p.id != id);
        Ok(1)
    }
}
