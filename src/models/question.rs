// src/models/question.rs

use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use validator::Validate;

/// Represents the 'questions' table in the database.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Question {
    pub id: i64,

    /// The question text shown to the player.
    pub question: String,

    pub answer: String,

    /// Id of the owning category. Nullable in the database, and not
    /// guaranteed to reference an existing row.
    pub category: Option<i64>,

    /// Difficulty rating, 1 (easy) to 5 (hard) by convention.
    pub difficulty: i32,
}

/// A question that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i32,
}

/// DTO for creating a new question.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[validate(
        length(min = 1, max = 1000, message = "Question must be between 1 and 1000 chars"),
        custom(function = not_blank)
    )]
    pub question: String,
    #[validate(
        length(min = 1, max = 500, message = "Answer must be between 1 and 500 chars"),
        custom(function = not_blank)
    )]
    pub answer: String,
    pub category: Option<i64>,
    #[serde(default = "default_difficulty")]
    pub difficulty: i32,
}

fn default_difficulty() -> i32 {
    1
}

/// Rejects text that is only whitespace; it would be stored empty after trimming.
fn not_blank(text: &str) -> Result<(), validator::ValidationError> {
    if text.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

impl From<CreateQuestionRequest> for NewQuestion {
    fn from(req: CreateQuestionRequest) -> Self {
        NewQuestion {
            question: req.question.trim().to_string(),
            answer: req.answer.trim().to_string(),
            category: req.category,
            difficulty: req.difficulty,
        }
    }
}

/// Body of `POST /questions/search`.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Query parameters shared by every paginated listing.
#[derive(Debug, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
