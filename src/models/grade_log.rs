// src/models/grade_log.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// Represents the 'grade_logs' table: a grade recorded for a subject.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct GradeLog {
    pub id: i64,
    pub user_id: i64,
    pub subject: String,
    pub grade: f64,
    pub notes: String,
    pub date: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateGradeLogRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Subject must be between 1 and 100 characters."
    ))]
    pub subject: Option<String>,
    pub grade: Option<f64>,
    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters."))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateGradeLogRequest {
    pub id: Option<i64>,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Subject must be between 1 and 100 characters."
    ))]
    pub subject: Option<String>,
    pub grade: Option<f64>,
    #[validate(length(max = 5000, message = "Notes must be at most 5000 characters."))]
    pub notes: Option<String>,
}

impl GradeLog {
    pub fn apply(&mut self, changes: UpdateGradeLogRequest) {
        if let Some(subject) = changes.subject {
            self.subject = subject;
        }
        if let Some(grade) = changes.grade {
            self.grade = grade;
        }
        if let Some(notes) = changes.notes {
            self.notes = notes;
        }
    }
}
