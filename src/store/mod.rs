// src/store/mod.rs

//! Storage collaborator. Handlers only ever talk to [`QuestionStore`].

pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub use memory::MemoryQuestionStore;
pub use postgres::PgQuestionStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The row was rejected by a database constraint (e.g. unknown category).
    #[error("constraint violation: {0}")]
    Constraint(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Read and write primitives over questions and categories.
///
/// Listings are ordered by ascending id.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;

    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StoreError>;

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError>;

    async fn create_question(&self, new: NewQuestion) -> Result<Question, StoreError>;

    /// Returns `false` when no question had that id.
    async fn delete_question(&self, id: i64) -> Result<bool, StoreError>;
}

/// The six categories every fresh deployment starts with.
pub const DEFAULT_CATEGORIES: [&str; 6] = [
    "Science",
    "Art",
    "Geography",
    "History",
    "Entertainment",
    "Sports",
];
