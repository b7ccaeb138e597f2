// src/engine/filter.rs

use crate::models::question::Question;

/// Keeps the questions filed under `category_id`, in their original order.
pub fn filter_by_category(all: &[Question], category_id: i64) -> Vec<Question> {
    all.iter()
        .filter(|q| q.category == Some(category_id))
        .cloned()
        .collect()
}

/// Keeps the questions whose text contains `term`, ignoring case.
///
/// An empty term matches every question, so the whole collection comes back.
pub fn search_by_text(all: &[Question], term: &str) -> Vec<Question> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return all.to_vec();
    }

    all.iter()
        .filter(|q| q.question.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
