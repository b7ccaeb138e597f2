// src/engine/assembler.rs

//! Response payloads. Shape only: every filtering and selection decision is
//! made before these are built.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{category::Category, question::Question};

/// Full category catalog keyed by id. Serializes as a JSON object
/// (`{"1": "Science", ...}`) in ascending id order.
pub type CategoryMap = BTreeMap<i64, String>;

pub fn category_map(categories: &[Category]) -> CategoryMap {
    categories
        .iter()
        .map(|c| (c.id, c.kind.clone()))
        .collect()
}

/// One page of a question listing.
#[derive(Debug, Serialize)]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Size of the filtered collection before pagination.
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

impl QuestionPage {
    pub fn new(
        page: &[Question],
        total_questions: usize,
        categories: &[Category],
        current_category: Option<&Category>,
    ) -> Self {
        QuestionPage {
            success: true,
            questions: page.to_vec(),
            total_questions,
            categories: category_map(categories),
            current_category: current_category.map(|c| c.kind.clone()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CategoryList {
    pub success: bool,
    pub categories: CategoryMap,
    pub total_categories: usize,
}

impl CategoryList {
    pub fn new(categories: &[Category]) -> Self {
        CategoryList {
            success: true,
            categories: category_map(categories),
            total_categories: categories.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
    pub success: bool,
    pub new_question: i64,
    pub questions: Vec<Question>,
    pub total_questions: usize,
}

#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
    pub success: bool,
    pub deleted_question: i64,
}

#[derive(Debug, Serialize)]
pub struct QuizTurn {
    pub success: bool,
    pub question: Question,
}
