use std::sync::Arc;

use chrono::{DateTime, Utc};

use activity_db::error::RepoError;
use activity_db::models::activity::{Activity, ActivityDraft, Category, Status};
use activity_db::repositories::activity_repo::ActivityStore;

/// Fields accepted when creating an activity. Status is deliberately
/// absent: every activity starts life as NEW, whatever the client sent.
#[derive(Debug, Clone)]
pub struct NewActivity {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub activity_date: DateTime<Utc>,
}

pub struct ActivityService {
    store: Arc<dyn ActivityStore>,
}

impl ActivityService {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self { store }
    }

    pub async fn get_all(&self) -> Result<Vec<Activity>, RepoError> {
        self.store.find_all().await
    }

    pub async fn create(&self, activity: NewActivity) -> Result<Activity, RepoError> {
        self.store
            .save(ActivityDraft {
                title: activity.title,
                category: activity.category,
                description: activity.description,
                activity_date: activity.activity_date,
                status: Status::New,
            })
            .await
    }

    pub async fn update(&self, id: i64, draft: ActivityDraft) -> Result<Activity, RepoError> {
        self.store.update(id, draft).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), RepoError> {
        self.store.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MemoryStore {
        items: Mutex<Vec<Activity>>,
        next_id: Mutex<i64>,
    }

    impl MemoryStore {
        fn new() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl ActivityStore for MemoryStore {
        async fn find_all(&self) -> Result<Vec<Activity>, RepoError> {
            Ok(self.items.lock().unwrap().clone())
        }

        async fn save(&self, draft: ActivityDraft) -> Result<Activity, RepoError> {
            let mut next_id = self.next_id.lock().unwrap();
            let activity = Activity {
                id: *next_id,
                title: draft.title,
                category: draft.category,
                description: draft.description,
                activity_date: draft.activity_date,
                status: draft.status,
            };
            *next_id += 1;
            self.items.lock().unwrap().push(activity.clone());
            Ok(activity)
        }

        async fn update(&self, id: i64, draft: ActivityDraft) -> Result<Activity, RepoError> {
            let mut items = self.items.lock().unwrap();
            let existing = items.iter_mut().find(|a| a.id == id).ok_or(RepoError::NotFound)?;
            existing.title = draft.title;
            existing.category = draft.category;
            existing.description = draft.description;
            existing.activity_date = draft.activity_date;
            existing.status = draft.status;
            Ok(existing.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepoError> {
            let mut items = self.items.lock().unwrap();
            let before = items.len();
            items.retain(|a| a.id != id);
            if items.len() == before {
                return Err(RepoError::NotFound);
            }
            Ok(())
        }
    }

    fn service() -> ActivityService {
        ActivityService::new(Arc::new(MemoryStore::new()))
    }

    fn new_activity() -> NewActivity {
        NewActivity {
            title: "Buy milk".to_string(),
            category: Category::Task,
            description: "2%".to_string(),
            activity_date: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_always_starts_as_new() {
        let service = service();
        let created = service.create(new_activity()).await.unwrap();
        assert_eq!(created.status, Status::New);
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn created_activity_shows_up_in_listing() {
        let service = service();
        let created = service.create(new_activity()).await.unwrap();
        let all = service.get_all().await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn update_passes_not_found_through() {
        let service = service();
        let draft = ActivityDraft {
            title: "Buy milk".to_string(),
            category: Category::Task,
            description: "2%".to_string(),
            activity_date: Utc::now(),
            status: Status::Expired,
        };
        let err = service.update(99, draft).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }

    #[tokio::test]
    async fn update_overwrites_all_mutable_fields() {
        let service = service();
        let created = service.create(new_activity()).await.unwrap();
        let draft = ActivityDraft {
            title: "Buy oat milk".to_string(),
            category: Category::Event,
            description: "barista blend".to_string(),
            activity_date: created.activity_date,
            status: Status::OnProgress,
        };
        let updated = service.update(created.id, draft).await.unwrap();
        assert_eq!(updated.title, "Buy oat milk");
        assert_eq!(updated.category, Category::Event);
        assert_eq!(updated.status, Status::OnProgress);
    }

    #[tokio::test]
    async fn second_delete_fails_with_not_found() {
        let service = service();
        let created = service.create(new_activity()).await.unwrap();
        service.delete(created.id).await.unwrap();
        let err = service.delete(created.id).await.unwrap_err();
        assert!(matches!(err, RepoError::NotFound));
    }
}
