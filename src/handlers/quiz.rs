// src/handlers/quiz.rs

use std::collections::HashSet;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::{
    engine::{
        assembler::QuizTurn,
        selector::{CategoryScope, select_question},
    },
    error::AppError,
    models::quiz::QuizRequest,
    state::AppState,
};

/// Draws the next quiz question.
///
/// * Scopes the pool to `quiz_category` (id 0 means every category).
/// * Skips everything in `previous_questions`.
/// * Answers 404 once the pool is exhausted.
pub async fn play_quiz(
    State(state): State<AppState>,
    payload: Result<Json<QuizRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(req) = payload?;
    let scope = CategoryScope::from(&req.quiz_category);

    tracing::debug!(
        "Quiz turn in {:?} ({}) after {} questions",
        scope,
        req.quiz_category.kind.as_deref().unwrap_or("unnamed"),
        req.previous_questions.len()
    );

    let questions = match scope {
        CategoryScope::All => state.store.list_questions().await?,
        CategoryScope::Only(id) => state.store.list_questions_by_category(id).await?,
    };
    let previous: HashSet<i64> = req.previous_questions.iter().copied().collect();

    let question = {
        let mut rng = state
            .rng
            .lock()
            .map_err(|_| AppError::InternalServerError("quiz rng lock poisoned".to_string()))?;
        select_question(&questions, scope, &previous, &mut *rng)?.clone()
    };

    Ok(Json(QuizTurn {
        success: true,
        question,
    }))
}
