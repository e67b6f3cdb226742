use chrono::Utc;
use diesel::prelude::*;

use crate::domain::post::{NewPost, Post};
use crate::domain::types::{CategoryId, PostId, PostSnippet, TopicId};
use crate::models::post::{NewPost as DbNewPost, Post as DbPost};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, PostReader, PostWriter};

impl PostReader for DieselRepository {
    fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let items = posts::table
            .order(posts::id.asc())
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Post>, _>>()?;

        Ok(items)
    }

    fn get_post_by_id(&self, id: PostId) -> RepositoryResult<Option<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let post = posts::table
            .filter(posts::id.eq(id.get()))
            .first::<DbPost>(&mut conn)
            .optional()?;

        let post = post.map(TryInto::try_into).transpose()?;
        Ok(post)
    }

    fn list_posts_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let items = posts::table
            .filter(posts::category_id.eq(category_id.get()))
            .order(posts::id.asc())
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Post>, _>>()?;

        Ok(items)
    }

    fn list_posts_by_topic(&self, topic_id: TopicId) -> RepositoryResult<Vec<Post>> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let items = posts::table
            .filter(posts::topic_id.eq(topic_id.get()))
            .order(posts::id.asc())
            .load::<DbPost>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Post>, _>>()?;

        Ok(items)
    }
}

impl PostWriter for DieselRepository {
    fn create_post(&self, post: &NewPost) -> RepositoryResult<Post> {
        use crate::schema::{categories, posts, topics};

        let mut conn = self.conn()?;

        let created = conn.transaction(|conn| {
            let category = categories::table
                .filter(categories::id.eq(post.category_id.get()))
                .select(categories::id)
                .first::<i32>(conn)
                .optional()?;
            if category.is_none() {
                return Err(RepositoryError::Reference("category"));
            }

            let topic = topics::table
                .filter(topics::id.eq(post.topic_id.get()))
                .select(topics::id)
                .first::<i32>(conn)
                .optional()?;
            if topic.is_none() {
                return Err(RepositoryError::Reference("topic"));
            }

            let db_post = DbNewPost::from_domain(post, Utc::now().naive_utc());
            diesel::insert_into(posts::table)
                .values(&db_post)
                .get_result::<DbPost>(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(created.try_into()?)
    }

    fn update_post(
        &self,
        id: PostId,
        title: &str,
        snippet: &PostSnippet,
        description: &str,
    ) -> RepositoryResult<Post> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let updated = diesel::update(posts::table.filter(posts::id.eq(id.get())))
            .set((
                posts::title.eq(title),
                posts::snippet.eq(snippet.as_str()),
                posts::description.eq(description),
            ))
            .get_result::<DbPost>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.try_into()?)
    }

    fn delete_post(&self, id: PostId) -> RepositoryResult<usize> {
        use crate::schema::posts;

        let mut conn = self.conn()?;

        let removed =
            diesel::delete(posts::table.filter(posts::id.eq(id.get()))).execute(&mut conn)?;
        if removed == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(removed)
    }
}
