use crate::domain::types::{CategoryId, TopicId};
use crate::dto::topics::TopicDto;
use crate::forms::topics::{
    CreateTopicFormPayload, DeleteTopicFormPayload, UpdateTopicFormPayload,
};
use crate::repository::{RepositoryError, TopicReader, TopicWriter};

use super::{ServiceError, ServiceResult};

pub fn topic_list<R>(repo: &R) -> ServiceResult<Vec<TopicDto>>
where
    R: TopicReader,
{
    match repo.list_topics() {
        Ok(topics) => Ok(topics.into_iter().map(TopicDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list topics: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn topic_detailed<R>(id: TopicId, repo: &R) -> ServiceResult<TopicDto>
where
    R: TopicReader,
{
    match repo.get_topic_by_id(id) {
        Ok(Some(topic)) => Ok(topic.into()),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get topic: {e}");
            Err(ServiceError::Internal)
        }
    }
}

/// Topics belonging to a category; an unknown category yields an empty list.
pub fn category_to_topic<R>(category_id: CategoryId, repo: &R) -> ServiceResult<Vec<TopicDto>>
where
    R: TopicReader,
{
    match repo.list_topics_by_category(category_id) {
        Ok(topics) => Ok(topics.into_iter().map(TopicDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list topics for category {category_id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn create_topic<R>(payload: CreateTopicFormPayload, repo: &R) -> ServiceResult<TopicDto>
where
    R: TopicWriter,
{
    match repo.create_topic(&payload.into_new_topic()) {
        Ok(topic) => Ok(topic.into()),
        Err(e @ RepositoryError::Reference(_)) => Err(ServiceError::Reference(e.to_string())),
        Err(e) => {
            log::error!("Failed to create topic: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_topic<R>(payload: UpdateTopicFormPayload, repo: &R) -> ServiceResult<TopicDto>
where
    R: TopicWriter,
{
    match repo.update_topic(payload.id, &payload.name) {
        Ok(topic) => Ok(topic.into()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to update topic: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn delete_topic<R>(payload: DeleteTopicFormPayload, repo: &R) -> ServiceResult<()>
where
    R: TopicWriter,
{
    match repo.delete_topic(payload.id) {
        Ok(_) => Ok(()),
        Err(RepositoryError::NotFound) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to delete topic: {e}");
            Err(ServiceError::Internal)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::topic::Topic;
    use crate::repository::test::TestRepository;
    use chrono::DateTime;

    fn sample_category() -> Category {
        Category {
            id: CategoryId::new(1).unwrap(),
            name: "Tech".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    fn sample_topic() -> Topic {
        Topic {
            id: TopicId::new(1).unwrap(),
            category_id: CategoryId::new(1).unwrap(),
            name: "AI".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        }
    }

    #[test]
    fn create_topic_requires_existing_category() {
        let repo = TestRepository::new();
        let payload = CreateTopicFormPayload {
            category_id: CategoryId::new(999).unwrap(),
            name: "AI".to_string(),
        };

        let err = create_topic(payload, &repo).unwrap_err();
        assert!(matches!(err, ServiceError::Reference(_)));
        assert!(topic_list(&repo).unwrap().is_empty());
    }

    #[test]
    fn create_topic_assigns_id_and_category() {
        let repo = TestRepository::new().with_categories(vec![sample_category()]);
        let payload = CreateTopicFormPayload {
            category_id: CategoryId::new(1).unwrap(),
            name: "AI".to_string(),
        };

        let topic = create_topic(payload, &repo).unwrap();
        assert_eq!(topic.id, 1);
        assert_eq!(topic.category_id, 1);
    }

    #[test]
    fn filters_topics_by_category() {
        let other = Topic {
            id: TopicId::new(2).unwrap(),
            category_id: CategoryId::new(2).unwrap(),
            name: "Cooking".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap().naive_utc(),
        };
        let repo = TestRepository::new().with_topics(vec![sample_topic(), other]);

        let topics = category_to_topic(CategoryId::new(1).unwrap(), &repo).unwrap();
        assert_eq!(topics.len(), 1);
        assert_eq!(topics[0].name, "AI");
    }

    #[test]
    fn unknown_category_yields_empty_topic_list() {
        let repo = TestRepository::new().with_topics(vec![sample_topic()]);

        let topics = category_to_topic(CategoryId::new(999).unwrap(), &repo).unwrap();
        assert!(topics.is_empty());
    }

    #[test]
    fn update_of_missing_topic_is_not_found() {
        let repo = TestRepository::new();
        let payload = UpdateTopicFormPayload {
            id: TopicId::new(5).unwrap(),
            name: "ML".to_string(),
        };

        let err = update_topic(payload, &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[test]
    fn delete_topic_removes_it() {
        let repo = TestRepository::new()
            .with_categories(vec![sample_category()])
            .with_topics(vec![sample_topic()]);
        let payload = DeleteTopicFormPayload {
            id: TopicId::new(1).unwrap(),
        };

        delete_topic(payload, &repo).unwrap();
        let err = topic_detailed(TopicId::new(1).unwrap(), &repo).unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }
}
