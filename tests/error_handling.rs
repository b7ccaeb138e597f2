// tests/error_handling.rs

//! Router-level checks that every failure uses the JSON error envelope.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{body_json, build_app, build_app_with, send, seeded_store};
use tower::ServiceExt;
use trivia::{
    models::{
        category::Category,
        question::{NewQuestion, Question},
    },
    store::{QuestionStore, StoreError},
};

/// Store whose reads fail like a lost database, and whose writes fail like a
/// rejected row.
struct BrokenStore;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl QuestionStore for BrokenStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Err(unavailable())
    }

    async fn list_questions_by_category(
        &self,
        _category_id: i64,
    ) -> Result<Vec<Question>, StoreError> {
        Err(unavailable())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Err(unavailable())
    }

    async fn get_category(&self, _id: i64) -> Result<Option<Category>, StoreError> {
        Err(unavailable())
    }

    async fn create_question(&self, _new: NewQuestion) -> Result<Question, StoreError> {
        Err(StoreError::Constraint("violates foreign key constraint".to_string()))
    }

    async fn delete_question(&self, _id: i64) -> Result<bool, StoreError> {
        Err(unavailable())
    }
}

#[tokio::test]
async fn wrong_method_returns_405_envelope() {
    for (method, uri) in [
        ("PUT", "/categories"),
        ("PUT", "/questions"),
        ("PATCH", "/questions/1"),
        ("GET", "/quizzes"),
        ("GET", "/questions/search"),
    ] {
        let response = send(build_app(seeded_store()), method, uri).await;
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{} {}", method, uri);

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 405);
        assert_eq!(json["message"], "method not allowed");
    }
}

#[tokio::test]
async fn unknown_route_returns_404_envelope() {
    let response = send(build_app(seeded_store()), "GET", "/random_path_that_does_not_exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 404);
    assert_eq!(json["message"], "resource not found");
}

#[tokio::test]
async fn trailing_slash_is_not_a_listing() {
    let response = send(build_app(seeded_store()), "GET", "/questions/?page=500").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "resource not found");
}

#[tokio::test]
async fn success_envelope_on_listing() {
    let response = send(build_app(seeded_store()), "GET", "/questions").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["success"], true);
}

#[tokio::test]
async fn database_failure_returns_500_envelope() {
    for (method, uri) in [
        ("GET", "/questions"),
        ("GET", "/categories"),
        ("GET", "/categories/1/questions"),
        ("DELETE", "/questions/1"),
    ] {
        let response = send(build_app_with(Arc::new(BrokenStore)), method, uri).await;
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "{} {}",
            method,
            uri
        );

        let json = body_json(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], 500);
        assert_eq!(json["message"], "internal server error");
    }
}

#[tokio::test]
async fn database_failure_in_quiz_is_not_coerced_to_422() {
    let request = Request::builder()
        .method("POST")
        .uri("/quizzes")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"previous_questions": [], "quiz_category": {"id": 0}}"#))
        .unwrap();

    let response = build_app_with(Arc::new(BrokenStore))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(response).await["message"], "internal server error");
}

#[tokio::test]
async fn constraint_failure_returns_422_envelope() {
    let request = Request::builder()
        .method("POST")
        .uri("/questions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            r#"{"question": "q", "answer": "a", "category": 1, "difficulty": 1}"#,
        ))
        .unwrap();

    let response = build_app_with(Arc::new(BrokenStore))
        .oneshot(request)
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], 422);
    assert_eq!(json["message"], "unprocessable");
}
