// src/handlers/tips.rs

use axum::{Json, extract::Path, response::IntoResponse};
use serde::Serialize;

use crate::error::AppError;

/// Route segment, class name, tips.
const STUDY_TIPS: &[(&str, &str, &[&str])] = &[
    (
        "Physics",
        "AP Physics",
        &[
            "Understand the core concepts before solving problems.",
            "Practice solving past exam questions regularly.",
            "Use diagrams to visualize problems.",
        ],
    ),
    (
        "Chemistry",
        "AP Chemistry",
        &[
            "Memorize periodic trends and key reactions.",
            "Practice balancing chemical equations.",
            "Understand stoichiometry thoroughly.",
        ],
    ),
    (
        "CSP",
        "AP CSP",
        &[
            "Learn Python basics thoroughly.",
            "Use online tools to practice coding concepts.",
            "Understand binary systems and algorithms.",
        ],
    ),
    (
        "Statistics",
        "AP Statistics",
        &[
            "Understand data visualization techniques.",
            "Practice calculating probabilities.",
            "Master regression and correlation concepts.",
        ],
    ),
];

#[derive(Debug, Serialize)]
pub struct ClassTips {
    pub class_name: &'static str,
    pub tips: &'static [&'static str],
}

fn find_tips(subject: &str) -> Option<ClassTips> {
    STUDY_TIPS
        .iter()
        .find(|(segment, _, _)| *segment == subject)
        .map(|&(_, class_name, tips)| ClassTips { class_name, tips })
}

/// Static study tips for one AP class. Public.
pub async fn get_tips(Path(subject): Path<String>) -> Result<impl IntoResponse, AppError> {
    find_tips(&subject)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No tips found for AP {}", subject)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_classes_have_three_tips() {
        for subject in ["Physics", "Chemistry", "CSP", "Statistics"] {
            let tips = find_tips(subject).unwrap();
            assert_eq!(tips.class_name, format!("AP {}", subject));
            assert_eq!(tips.tips.len(), 3);
        }
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(find_tips("physics").is_none());
        assert!(find_tips("Biology").is_none());
    }
}
