use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

use activity_db::error::RepoError;
use activity_db::models::activity::{Activity, ActivityDraft, Category, Status};

use crate::AppState;
use crate::services::activity_service::NewActivity;

/// Every endpoint answers with the same envelope, errors included.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: Option<T>,
    pub status_code: u16,
    pub message: String,
}

fn respond<T: Serialize>(status: StatusCode, data: Option<T>, message: impl Into<String>) -> Response {
    let body = ApiResponse {
        data,
        status_code: status.as_u16(),
        message: message.into(),
    };
    (status, Json(body)).into_response()
}

fn fail(status: StatusCode, message: impl Into<String>) -> Response {
    respond::<serde_json::Value>(status, None, message)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title must be between 3 and 250 characters")]
    Title,
    #[error("category must be one of TASK, EVENT")]
    Category,
    #[error("description is required")]
    Description,
    #[error("status must be one of NEW, ON PROGRESS, EXPIRED")]
    Status,
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if (3..=250).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::Title)
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityCreateRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub activity_date: DateTime<Utc>,
}

impl ActivityCreateRequest {
    fn validate(self) -> Result<NewActivity, ValidationError> {
        validate_title(&self.title)?;
        let category = Category::parse(&self.category).ok_or(ValidationError::Category)?;
        if self.description.is_empty() {
            return Err(ValidationError::Description);
        }
        Ok(NewActivity {
            title: self.title,
            category,
            description: self.description,
            activity_date: self.activity_date,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ActivityUpdateRequest {
    pub title: String,
    pub category: String,
    pub description: String,
    pub activity_date: DateTime<Utc>,
    pub status: String,
}

impl ActivityUpdateRequest {
    fn validate(self) -> Result<ActivityDraft, ValidationError> {
        validate_title(&self.title)?;
        let category = Category::parse(&self.category).ok_or(ValidationError::Category)?;
        if self.description.is_empty() {
            return Err(ValidationError::Description);
        }
        let status = Status::parse(&self.status).ok_or(ValidationError::Status)?;
        Ok(ActivityDraft {
            title: self.title,
            category,
            description: self.description,
            activity_date: self.activity_date,
            status,
        })
    }
}

/// GET /api/activities
pub async fn get_activities(State(state): State<AppState>) -> Response {
    match state.activities.get_all().await {
        Ok(activities) => respond(
            StatusCode::OK,
            Some(activities),
            "Activities retrieved successfully",
        ),
        Err(e) => {
            error!("Failed to list activities: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// POST /api/activities
pub async fn create_activity(
    State(state): State<AppState>,
    payload: Result<Json<ActivityCreateRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return fail(StatusCode::BAD_REQUEST, "Cannot parse JSON");
    };

    let activity = match request.validate() {
        Ok(activity) => activity,
        Err(e) => return fail(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.activities.create(activity).await {
        Ok(created) => respond(
            StatusCode::CREATED,
            Some(created),
            "Activity created successfully",
        ),
        Err(e) => {
            error!("Failed to create activity: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// PUT /api/activities/{id}
pub async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ActivityUpdateRequest>, JsonRejection>,
) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return fail(StatusCode::BAD_REQUEST, "Invalid ID");
    };

    let Ok(Json(request)) = payload else {
        return fail(StatusCode::BAD_REQUEST, "Cannot parse JSON");
    };

    let draft = match request.validate() {
        Ok(draft) => draft,
        Err(e) => return fail(StatusCode::BAD_REQUEST, e.to_string()),
    };

    match state.activities.update(id, draft).await {
        Ok(updated) => respond::<Activity>(
            StatusCode::OK,
            Some(updated),
            "Activity updated successfully",
        ),
        Err(e @ RepoError::NotFound) => fail(StatusCode::NOT_FOUND, e.to_string()),
        Err(e) => {
            error!("Failed to update activity {id}: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// DELETE /api/activities/{id}
pub async fn delete_activity(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let Ok(id) = id.parse::<i64>() else {
        return fail(StatusCode::BAD_REQUEST, "Invalid ID");
    };

    match state.activities.delete(id).await {
        Ok(()) => respond::<serde_json::Value>(StatusCode::OK, None, "Activity deleted successfully"),
        Err(RepoError::NotFound) => fail(StatusCode::NOT_FOUND, "Activity not found"),
        Err(e) => {
            error!("Failed to delete activity {id}: {e}");
            fail(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
