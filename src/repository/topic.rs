use chrono::Utc;
use diesel::prelude::*;

use crate::domain::topic::{NewTopic, Topic};
use crate::domain::types::{CategoryId, TopicId};
use crate::models::topic::{NewTopic as DbNewTopic, Topic as DbTopic};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, TopicReader, TopicWriter};

impl TopicReader for DieselRepository {
    fn list_topics(&self) -> RepositoryResult<Vec<Topic>> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let items = topics::table
            .order(topics::id.asc())
            .load::<DbTopic>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Topic>, _>>()?;

        Ok(items)
    }

    fn get_topic_by_id(&self, id: TopicId) -> RepositoryResult<Option<Topic>> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let topic = topics::table
            .filter(topics::id.eq(id.get()))
            .first::<DbTopic>(&mut conn)
            .optional()?;

        let topic = topic.map(TryInto::try_into).transpose()?;
        Ok(topic)
    }

    fn list_topics_by_category(&self, category_id: CategoryId) -> RepositoryResult<Vec<Topic>> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let items = topics::table
            .filter(topics::category_id.eq(category_id.get()))
            .order(topics::id.asc())
            .load::<DbTopic>(&mut conn)?
            .into_iter()
            .map(TryInto::try_into)
            .collect::<Result<Vec<Topic>, _>>()?;

        Ok(items)
    }
}

impl TopicWriter for DieselRepository {
    fn create_topic(&self, topic: &NewTopic) -> RepositoryResult<Topic> {
        use crate::schema::{categories, topics};

        let mut conn = self.conn()?;

        let created = conn.transaction(|conn| {
            let parent = categories::table
                .filter(categories::id.eq(topic.category_id.get()))
                .select(categories::id)
                .first::<i32>(conn)
                .optional()?;
            if parent.is_none() {
                return Err(RepositoryError::Reference("category"));
            }

            let db_topic = DbNewTopic::from_domain(topic, Utc::now().naive_utc());
            diesel::insert_into(topics::table)
                .values(&db_topic)
                .get_result::<DbTopic>(conn)
                .map_err(RepositoryError::from)
        })?;

        Ok(created.try_into()?)
    }

    fn update_topic(&self, id: TopicId, name: &str) -> RepositoryResult<Topic> {
        use crate::schema::topics;

        let mut conn = self.conn()?;

        let updated = diesel::update(topics::table.filter(topics::id.eq(id.get())))
            .set(topics::name.eq(name))
            .get_result::<DbTopic>(&mut conn)
            .optional()?
            .ok_or(RepositoryError::NotFound)?;

        Ok(updated.try_into()?)
    }

    fn delete_topic(&self, id: TopicId) -> RepositoryResult<usize> {
        use crate::schema::{posts, topics};

        let mut conn = self.conn()?;

        conn.transaction(|conn| {
            let posts_removed =
                diesel::delete(posts::table.filter(posts::topic_id.eq(id.get()))).execute(conn)?;

            let removed =
                diesel::delete(topics::table.filter(topics::id.eq(id.get()))).execute(conn)?;
            if removed == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(posts_removed + removed)
        })
    }
}
