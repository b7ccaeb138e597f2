// src/store/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DEFAULT_CATEGORIES, QuestionStore, StoreError};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

#[derive(Default)]
struct Tables {
    questions: BTreeMap<i64, Question>,
    categories: BTreeMap<i64, Category>,
    next_question_id: i64,
}

/// In-process [`QuestionStore`] used when no database is configured, and by the tests.
///
/// Mirrors the Postgres schema: ids start at 1 and are never reused, and a
/// question may only reference an existing category.
#[derive(Default)]
pub struct MemoryQuestionStore {
    tables: RwLock<Tables>,
}

impl MemoryQuestionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with [`DEFAULT_CATEGORIES`] and no questions.
    pub fn with_default_categories() -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .zip(1..)
            .map(|(kind, id)| Category { id, kind: kind.to_string() });
        Self::with_data(categories, std::iter::empty())
    }

    /// Store pre-filled with the given rows. Question ids are kept as given.
    pub fn with_data(
        categories: impl IntoIterator<Item = Category>,
        questions: impl IntoIterator<Item = Question>,
    ) -> Self {
        let categories: BTreeMap<i64, Category> =
            categories.into_iter().map(|c| (c.id, c)).collect();
        let questions: BTreeMap<i64, Question> =
            questions.into_iter().map(|q| (q.id, q)).collect();
        let next_question_id = questions.keys().next_back().map_or(1, |id| id + 1);

        Self {
            tables: RwLock::new(Tables {
                questions,
                categories,
                next_question_id,
            }),
        }
    }
}

#[async_trait]
impl QuestionStore for MemoryQuestionStore {
    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        Ok(self.tables.read().await.questions.values().cloned().collect())
    }

    async fn list_questions_by_category(
        &self,
        category_id: i64,
    ) -> Result<Vec<Question>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables
            .questions
            .values()
            .filter(|q| q.category == Some(category_id))
            .cloned()
            .collect())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        Ok(self.tables.read().await.categories.values().cloned().collect())
    }

    async fn get_category(&self, id: i64) -> Result<Option<Category>, StoreError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.tables.write().await;

        if let Some(category) = new.category {
            if !tables.categories.contains_key(&category) {
                return Err(StoreError::Constraint(format!(
                    "category {} does not exist",
                    category
                )));
            }
        }

        let id = tables.next_question_id;
        tables.next_question_id += 1;

        let question = Question {
            id,
            question: new.question,
            answer: new.answer,
            category: new.category,
            difficulty: new.difficulty,
        };
        tables.questions.insert(id, question.clone());

        Ok(question)
    }

    async fn delete_question(&self, id: i64) -> Result<bool, StoreError> {
        Ok(self.tables.write().await.questions.remove(&id).is_some())
    }
}
