use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

use crate::error::RepoError;
use crate::models::activity::{Activity, ActivityDraft, Category, Status};

/// Storage contract for activities. Implemented by the Postgres
/// repository below; tests swap in an in-memory implementation.
#[async_trait]
pub trait ActivityStore: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Activity>, RepoError>;
    async fn save(&self, draft: ActivityDraft) -> Result<Activity, RepoError>;
    async fn update(&self, id: i64, draft: ActivityDraft) -> Result<Activity, RepoError>;
    async fn delete(&self, id: i64) -> Result<(), RepoError>;
}

/// Category and status live as TEXT in Postgres; rows come back as plain
/// strings and are narrowed to the enums on the way out.
#[derive(Debug, FromRow)]
struct ActivityRow {
    id: i64,
    title: String,
    category: String,
    description: String,
    activity_date: DateTime<Utc>,
    status: String,
}

impl TryFrom<ActivityRow> for Activity {
    type Error = RepoError;

    fn try_from(row: ActivityRow) -> Result<Self, Self::Error> {
        let category = Category::parse(&row.category).ok_or(RepoError::Decode {
            column: "category",
            value: row.category.clone(),
        })?;
        let status = Status::parse(&row.status).ok_or(RepoError::Decode {
            column: "status",
            value: row.status.clone(),
        })?;
        Ok(Activity {
            id: row.id,
            title: row.title,
            category,
            description: row.description,
            activity_date: row.activity_date,
            status,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ActivityRepository {
    pool: PgPool,
}

impl ActivityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ActivityStore for ActivityRepository {
    async fn find_all(&self) -> Result<Vec<Activity>, RepoError> {
        let rows = sqlx::query_as::<_, ActivityRow>(
            "SELECT id, title, category, description, activity_date, status FROM activities",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Activity::try_from).collect()
    }

    async fn save(&self, draft: ActivityDraft) -> Result<Activity, RepoError> {
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            INSERT INTO activities (title, category, description, activity_date, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, category, description, activity_date, status
            "#,
        )
        .bind(&draft.title)
        .bind(draft.category.as_str())
        .bind(&draft.description)
        .bind(draft.activity_date)
        .bind(draft.status.as_str())
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    async fn update(&self, id: i64, draft: ActivityDraft) -> Result<Activity, RepoError> {
        // RETURNING re-reads the row after the write, so the caller sees
        // whatever storage actually applied.
        let row = sqlx::query_as::<_, ActivityRow>(
            r#"
            UPDATE activities
            SET title = $1, category = $2, description = $3, activity_date = $4, status = $5
            WHERE id = $6
            RETURNING id, title, category, description, activity_date, status
            "#,
        )
        .bind(&draft.title)
        .bind(draft.category.as_str())
        .bind(&draft.description)
        .bind(draft.activity_date)
        .bind(draft.status.as_str())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => row.try_into(),
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
