// src/handlers/fallback.rs

use axum::http::Uri;

use crate::error::AppError;

/// Any path without a route.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

/// A known path called with the wrong verb.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
