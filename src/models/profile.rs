// src/models/profile.rs

use serde::{Deserialize, Serialize};
use sqlx::{prelude::FromRow, types::Json};
use validator::Validate;

/// Represents the 'profiles' table in the database.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    pub name: String,

    /// Class names, stored as a JSON array.
    pub classes: Json<Vec<String>>,

    pub favorite_class: Option<String>,
    pub favorite_flashcard: Option<String>,

    /// Grade level (e.g. "Junior", "Senior").
    pub grade: Option<String>,

    pub user_id: Option<i64>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: Option<String>,
    #[validate(custom(function = validate_classes))]
    pub classes: Option<Vec<String>>,
    #[validate(length(max = 100, message = "Favorite class must be at most 100 characters."))]
    pub favorite_class: Option<String>,
    #[validate(length(max = 255, message = "Favorite flashcard must be at most 255 characters."))]
    pub favorite_flashcard: Option<String>,
    #[validate(length(max = 50, message = "Grade must be at most 50 characters."))]
    pub grade: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters."))]
    pub name: Option<String>,
    #[validate(custom(function = validate_classes))]
    pub classes: Option<Vec<String>>,
    #[validate(length(max = 100, message = "Favorite class must be at most 100 characters."))]
    pub favorite_class: Option<String>,
    #[validate(length(max = 255, message = "Favorite flashcard must be at most 255 characters."))]
    pub favorite_flashcard: Option<String>,
    #[validate(length(max = 50, message = "Grade must be at most 50 characters."))]
    pub grade: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, changes: UpdateProfileRequest) {
        if let Some(name) = changes.name {
            self.name = name;
        }
        if let Some(classes) = changes.classes {
            self.classes = Json(normalize_classes(classes));
        }
        if changes.favorite_class.is_some() {
            self.favorite_class = changes.favorite_class;
        }
        if changes.favorite_flashcard.is_some() {
            self.favorite_flashcard = changes.favorite_flashcard;
        }
        if changes.grade.is_some() {
            self.grade = changes.grade;
        }
    }
}

/// Trims class names and drops blanks and repeats, keeping first-seen order.
pub fn normalize_classes(classes: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(classes.len());
    for class in classes {
        let class = class.trim();
        if !class.is_empty() && !out.iter().any(|c| c == class) {
            out.push(class.to_string());
        }
    }
    out
}

fn validate_classes(classes: &[String]) -> Result<(), validator::ValidationError> {
    if classes.len() > 20 {
        return Err(validator::ValidationError::new("too_many_classes")
            .with_message("At most 20 classes are allowed.".into()));
    }
    for class in classes {
        if class.len() > 100 {
            return Err(validator::ValidationError::new("class_name_too_long")
                .with_message("Class names must be at most 100 characters.".into()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_classes_trims_and_dedupes() {
        let classes = vec![
            " AP CSP ".to_string(),
            "".to_string(),
            "AP Physics".to_string(),
            "AP CSP".to_string(),
        ];
        assert_eq!(normalize_classes(classes), vec!["AP CSP", "AP Physics"]);
    }

    #[test]
    fn apply_keeps_omitted_fields() {
        let mut profile = Profile {
            id: 1,
            name: "Grace Hopper".to_string(),
            classes: Json(vec!["AP CSP".to_string()]),
            favorite_class: Some("AP CSP".to_string()),
            favorite_flashcard: Some("Binary Numbers".to_string()),
            grade: Some("Junior".to_string()),
            user_id: Some(2),
        };

        profile.apply(UpdateProfileRequest {
            name: None,
            classes: None,
            favorite_class: None,
            favorite_flashcard: None,
            grade: Some("Senior".to_string()),
        });

        assert_eq!(profile.name, "Grace Hopper");
        assert_eq!(profile.classes.0, vec!["AP CSP"]);
        assert_eq!(profile.favorite_flashcard.as_deref(), Some("Binary Numbers"));
        assert_eq!(profile.grade.as_deref(), Some("Senior"));
    }
}
