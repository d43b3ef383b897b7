// src/models/question.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A multiple-choice question from the static quiz pool.
/// Not serializable: clients only ever see `PublicQuestion`.
#[derive(Debug, Clone)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: &'static str,

    /// The four options, in display order.
    pub options: [&'static str; 4],

    /// Must be one of `options`.
    pub correct_answer: &'static str,
}

/// DTO for sending a question to the client (excludes the correct answer).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub id: i64,
    pub question: String,
    pub options: Vec<String>,
}

impl From<&Question> for PublicQuestion {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id,
            question: q.question.to_string(),
            options: q.options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// One answered question in a submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmittedAnswer {
    #[serde(rename = "questionId")]
    pub question_id: i64,
    pub answer: String,
}

/// DTO for submitting a quiz attempt.
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitQuizRequest {
    /// Display name written to the leaderboard.
    #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters."))]
    pub name: Option<String>,

    #[serde(default)]
    pub answers: Vec<SubmittedAnswer>,
}

/// Result of grading a submission.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct QuizResult {
    pub name: String,
    pub score: i64,
}
