// src/state.rs

use std::sync::{Arc, Mutex};

use axum::extract::FromRef;
use rand::{SeedableRng, rngs::StdRng};

use crate::{config::Config, store::QuestionStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QuestionStore>,
    pub config: Config,
    /// Random source for quiz draws. Locked only for the draw itself.
    pub rng: Arc<Mutex<StdRng>>,
}

impl AppState {
    /// Seeds the quiz RNG from `config.quiz_seed`, or from OS entropy when unset.
    pub fn new(store: Arc<dyn QuestionStore>, config: Config) -> Self {
        let rng = match config.quiz_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            store,
            config,
            rng: Arc::new(Mutex::new(rng)),
        }
    }
}

impl FromRef<AppState> for Arc<dyn QuestionStore> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
