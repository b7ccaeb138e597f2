// src/handlers/questions.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    response::IntoResponse,
};
use validator::Validate;

use crate::{
    config::QUESTIONS_PER_PAGE,
    engine::{
        QueryError,
        assembler::{CreatedQuestion, DeletedQuestion, QuestionPage},
        filter::search_by_text,
        pagination::{ensure_page_in_range, page_number, paginate},
    },
    error::AppError,
    models::question::{CreateQuestionRequest, PageParams, SearchRequest},
    store::QuestionStore,
};

/// Lists one page of all questions, ordered by id.
pub async fn list_questions(
    State(store): State<Arc<dyn QuestionStore>>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let page = page_number(params.page)?;

    let questions = store.list_questions().await?;
    if questions.is_empty() {
        return Err(QueryError::NotFound.into());
    }
    ensure_page_in_range(questions.len(), page, QUESTIONS_PER_PAGE)?;

    let categories = store.list_categories().await?;

    Ok(Json(QuestionPage::new(
        paginate(&questions, page, QUESTIONS_PER_PAGE),
        questions.len(),
        &categories,
        None,
    )))
}

/// Searches question text, case-insensitively.
///
/// A missing or empty `searchTerm` lists every question. No match is a
/// successful, empty page.
pub async fn search_questions(
    State(store): State<Arc<dyn QuestionStore>>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let Json(payload) = payload?;
    let page = page_number(params.page)?;

    let term = payload.search_term.unwrap_or_default();
    let found = search_by_text(&store.list_questions().await?, &term);
    ensure_page_in_range(found.len(), page, QUESTIONS_PER_PAGE)?;

    tracing::debug!("Search {:?} matched {} questions", term, found.len());

    let categories = store.list_categories().await?;

    Ok(Json(QuestionPage::new(
        paginate(&found, page, QUESTIONS_PER_PAGE),
        found.len(),
        &categories,
        None,
    )))
}

/// Creates a question, then returns the requested page of the updated listing.
pub async fn create_question(
    State(store): State<Arc<dyn QuestionStore>>,
    params: Result<Query<PageParams>, QueryRejection>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params?;
    let Json(payload) = payload?;
    let page = page_number(params.page)?;

    if let Err(validation_errors) = payload.validate() {
        return Err(AppError::Unprocessable(validation_errors.to_string()));
    }

    let created = store.create_question(payload.into()).await?;
    tracing::info!("Created question {}", created.id);

    let questions = store.list_questions().await?;

    Ok(Json(CreatedQuestion {
        success: true,
        new_question: created.id,
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
    }))
}

/// Deletes a question by ID.
pub async fn delete_question(
    State(store): State<Arc<dyn QuestionStore>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;

    if !store.delete_question(id).await? {
        return Err(AppError::NotFound(format!("Question {} not found", id)));
    }
    tracing::info!("Deleted question {}", id);

    Ok(Json(DeletedQuestion {
        success: true,
        deleted_question: id,
    }))
}
