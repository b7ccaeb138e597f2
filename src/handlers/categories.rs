// src/handlers/categories.rs

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::IntoResponse,
};

use crate::{
    config::QUESTIONS_PER_PAGE,
    engine::{
        QueryError,
        assembler::{CategoryList, QuestionPage},
        filter::filter_by_category,
        pagination::{ensure_page_in_range, page_number, paginate},
    },
    error::AppError,
    models::question::PageParams,
    store::QuestionStore,
};

/// Lists the whole category catalog.
pub async fn list_categories(
    State(store): State<Arc<dyn QuestionStore>>,
) -> Result<impl IntoResponse, AppError> {
    let categories = store.list_categories().await?;

    if categories.is_empty() {
        return Err(QueryError::NotFound.into());
    }

    Ok(Json(CategoryList::new(&categories)))
}

/// Lists one page of the questions filed under a category.
///
/// Unknown categories and categories without questions are both 404.
pub async fn list_questions_by_category(
    State(store): State<Arc<dyn QuestionStore>>,
    id: Result<Path<i64>, PathRejection>,
    params: Result<Query<PageParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let Query(params) = params?;
    let page = page_number(params.page)?;

    let category = store.get_category(id).await?.ok_or(QueryError::NotFound)?;

    let questions = filter_by_category(&store.list_questions().await?, id);
    if questions.is_empty() {
        tracing::debug!("Category {} has no questions", id);
        return Err(QueryError::NotFound.into());
    }
    ensure_page_in_range(questions.len(), page, QUESTIONS_PER_PAGE)?;

    let categories = store.list_categories().await?;

    Ok(Json(QuestionPage::new(
        paginate(&questions, page, QUESTIONS_PER_PAGE),
        questions.len(),
        &categories,
        Some(&category),
    )))
}
