// src/engine/selector.rs

use std::collections::HashSet;

use rand::{Rng, seq::SliceRandom};

use super::QueryError;
use crate::models::question::Question;

/// Which questions a quiz round draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    All,
    Only(i64),
}

impl CategoryScope {
    pub fn admits(&self, question: &Question) -> bool {
        match self {
            CategoryScope::All => true,
            CategoryScope::Only(id) => question.category == Some(*id),
        }
    }
}

/// Draws one question uniformly at random from `all`, restricted to `scope`
/// and skipping every id in `previous`.
///
/// Returns [`QueryError::Exhausted`] once nothing is left to draw.
pub fn select_question<'a, R: Rng + ?Sized>(
    all: &'a [Question],
    scope: CategoryScope,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> Result<&'a Question, QueryError> {
    let pool: Vec<&Question> = all
        .iter()
        .filter(|q| scope.admits(q) && !previous.contains(&q.id))
        .collect();

    pool.choose(rng).copied().ok_or(QueryError::Exhausted)
}
