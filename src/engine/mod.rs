// src/engine/mod.rs

//! Question retrieval and quiz-selection engine.
//!
//! Everything in here is pure computation over collections the caller has
//! already loaded from a [`crate::store::QuestionStore`].

pub mod assembler;
pub mod error;
pub mod filter;
pub mod pagination;
pub mod selector;

pub use error::QueryError;
