// src/utils/trivia.rs

use serde::Deserialize;

use crate::error::AppError;

/// Raw response of an Open Trivia DB style `api.php` endpoint.
#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<TriviaItem>,
}

#[derive(Debug, Deserialize)]
pub struct TriviaItem {
    #[serde(default)]
    pub category: Option<String>,
    pub question: Option<String>,
    pub correct_answer: Option<String>,
}

/// A decoded question/answer pair ready to become a flashcard.
#[derive(Debug, Clone, PartialEq)]
pub struct TriviaCard {
    pub question: String,
    pub answer: String,
}

/// Query options forwarded to the trivia API.
#[derive(Debug, Clone)]
pub struct TriviaQuery {
    pub amount: u32,
    pub difficulty: Option<String>,
    pub category: Option<u32>,
}

/// Fetches multiple-choice questions from the trivia API at `base_url`.
pub async fn fetch(
    client: &reqwest::Client,
    base_url: &str,
    query: &TriviaQuery,
) -> Result<TriviaResponse, AppError> {
    let mut params: Vec<(&str, String)> = vec![
        ("amount", query.amount.to_string()),
        ("type", "multiple".to_string()),
    ];
    if let Some(difficulty) = &query.difficulty {
        params.push(("difficulty", difficulty.clone()));
    }
    if let Some(category) = query.category {
        params.push(("category", category.to_string()));
    }

    let response = client.get(base_url).query(&params).send().await?;

    if !response.status().is_success() {
        return Err(AppError::InternalServerError(format!(
            "Trivia API responded with {}",
            response.status()
        )));
    }

    let body: TriviaResponse = response.json().await?;
    if body.response_code != 0 {
        return Err(AppError::InternalServerError(format!(
            "Trivia API returned response_code {}",
            body.response_code
        )));
    }

    Ok(body)
}

/// Turns API items into cards, decoding HTML entities and skipping incomplete items.
pub fn to_cards(items: &[TriviaItem]) -> Vec<TriviaCard> {
    items
        .iter()
        .filter_map(|item| {
            let question = item.question.as_deref()?.trim();
            let answer = item.correct_answer.as_deref()?.trim();
            if question.is_empty() || answer.is_empty() {
                return None;
            }
            Some(TriviaCard {
                question: html_escape::decode_html_entities(question).into_owned(),
                answer: html_escape::decode_html_entities(answer).into_owned(),
            })
        })
        .collect()
}

/// Deck title for an import, named after the first item's category.
pub fn deck_title(items: &[TriviaItem]) -> String {
    let category = items
        .iter()
        .find_map(|item| item.category.as_deref())
        .map(|c| html_escape::decode_html_entities(c).into_owned());

    match category {
        Some(category) => format!("Imported Trivia: {}", category),
        None => "Imported Trivia".to_string(),
    }
}
