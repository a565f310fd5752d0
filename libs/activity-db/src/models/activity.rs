use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "TASK")]
    Task,
    #[serde(rename = "EVENT")]
    Event,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Task => "TASK",
            Category::Event => "EVENT",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "TASK" => Some(Category::Task),
            "EVENT" => Some(Category::Event),
            _ => None,
        }
    }
}

/// Lifecycle state of an activity. The wire and storage form is the
/// uppercase string, space included for "ON PROGRESS".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "NEW")]
    New,
    #[serde(rename = "ON PROGRESS")]
    OnProgress,
    #[serde(rename = "EXPIRED")]
    Expired,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::New => "NEW",
            Status::OnProgress => "ON PROGRESS",
            Status::Expired => "EXPIRED",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "NEW" => Some(Status::New),
            "ON PROGRESS" => Some(Status::OnProgress),
            "EXPIRED" => Some(Status::Expired),
            _ => None,
        }
    }
}

/// An activity row as stored, id assigned by Postgres on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub activity_date: DateTime<Utc>,
    pub status: Status,
}

/// Field values for an insert or a full-field update. No id: storage
/// assigns it on insert, the caller supplies it separately on update.
#[derive(Debug, Clone)]
pub struct ActivityDraft {
    pub title: String,
    pub category: Category,
    pub description: String,
    pub activity_date: DateTime<Utc>,
    pub status: Status,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_through_storage_form() {
        for status in [Status::New, Status::OnProgress, Status::Expired] {
            assert_eq!(Status::parse(status.as_str()), Some(status));
        }
        assert_eq!(Status::OnProgress.as_str(), "ON PROGRESS");
    }

    #[test]
    fn category_round_trips_through_storage_form() {
        for category in [Category::Task, Category::Event] {
            assert_eq!(Category::parse(category.as_str()), Some(category));
        }
    }

    #[test]
    fn unknown_values_are_rejected() {
        assert_eq!(Status::parse("DONE"), None);
        assert_eq!(Status::parse("on progress"), None);
        assert_eq!(Category::parse("MEETING"), None);
    }

    #[test]
    fn status_json_form_matches_storage_form() {
        let json = serde_json::to_string(&Status::OnProgress).unwrap();
        assert_eq!(json, "\"ON PROGRESS\"");
        let back: Status = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Status::OnProgress);
    }
}
