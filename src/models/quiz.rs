// src/models/quiz.rs

use serde::Deserialize;

use crate::engine::selector::CategoryScope;

/// Body of `POST /quizzes`.
#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    /// Ids the player has already seen this round.
    #[serde(default)]
    pub previous_questions: Vec<i64>,

    pub quiz_category: QuizCategory,
}

/// The category picked on the play screen. The frontend sends id 0 for "All".
#[derive(Debug, Deserialize)]
pub struct QuizCategory {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl From<&QuizCategory> for CategoryScope {
    fn from(category: &QuizCategory) -> Self {
        if category.id == 0 {
            CategoryScope::All
        } else {
            CategoryScope::Only(category.id)
        }
    }
}
