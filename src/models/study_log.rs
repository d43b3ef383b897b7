// src/models/study_log.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'study_logs' table: one study session of a user.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudyLog {
    pub id: i64,
    pub user_id: i64,
    pub subject: String,
    pub hours_studied: f64,
    pub notes: String,
    /// Defaulted by the database on insert.
    pub date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateStudyLogRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Subject must be between 1 and 100 characters."
    ))]
    pub subject: Option<String>,
    #[validate(range(min = 0.0, message = "Hours must not be negative."))]
    pub hours: Option<f64>,
    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters."))]
    pub notes: Option<String>,
}

/// Partial update. `hours` is accepted as an alias of `hours_studied`.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStudyLogRequest {
    pub id: Option<i64>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Subject must be between 1 and 100 characters."
    ))]
    pub subject: Option<String>,
    #[serde(alias = "hours")]
    #[validate(range(min = 0.0, message = "Hours must not be negative."))]
    pub hours_studied: Option<f64>,
    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters."))]
    pub notes: Option<String>,
}

impl StudyLog {
    pub fn apply(&mut self, changes: UpdateStudyLogRequest) {
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(hours) = changes.hours_studied {
            self.hours_studied = hours;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
    }
}
