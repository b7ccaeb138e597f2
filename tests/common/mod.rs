// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use axum::{Router, body::Body, http::Request, response::Response};
use http_body_util::BodyExt;
use tower::ServiceExt;
use trivia::{
    config::Config,
    models::{category::Category, question::Question},
    routes,
    state::AppState,
    store::{DEFAULT_CATEGORIES, MemoryQuestionStore, QuestionStore},
};

pub const QUIZ_SEED: u64 = 1234;

const TEXTS: [&str; 19] = [
    "What is the largest lake in Africa?",
    "What is the heaviest organ in the human body?",
    "In which royal palace would you find the Hall of Mirrors?",
    "Who discovered penicillin?",
    "What movie earned Tom Hanks his third straight Oscar nomination, in 1996?",
    "Hematology is a branch of medicine involving the study of what?",
    "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?",
    "La Giaconda is better known as what?",
    "How many paintings did Van Gogh sell in his lifetime?",
    "Which is the only team to play in every soccer World Cup tournament?",
    "Which country won the first ever soccer World Cup in 1930?",
    "Who invented Peanut Butter?",
    "The Taj Mahal is located in which Indian city?",
    "Which Dutch graphic artist created the impossible objects of Escher?",
    "What boxer's original name is Cassius Clay?",
    "Who was the first emperor of Rome?",
    "What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?",
    "What is the capital city of Australia?",
    "Which planet is known as the Red Planet?",
];

/// Category of the seeded question `id`. Science (1) holds exactly 2, 4 and 6;
/// Entertainment (5) holds nothing.
fn seeded_category(id: i64) -> i64 {
    match id {
        2 | 4 | 6 => 1,
        _ => [2, 3, 4, 6][(id % 4) as usize],
    }
}

pub fn seeded_questions() -> Vec<Question> {
    TEXTS
        .iter()
        .zip(1..)
        .map(|(text, id)| Question {
            id,
            question: text.to_string(),
            answer: format!("Answer {}", id),
            category: Some(seeded_category(id)),
            difficulty: 1 + (id % 5) as i32,
        })
        .collect()
}

pub fn seeded_categories() -> Vec<Category> {
    DEFAULT_CATEGORIES
        .iter()
        .zip(1..)
        .map(|(kind, id)| Category {
            id,
            kind: kind.to_string(),
        })
        .collect()
}

pub fn seeded_store() -> MemoryQuestionStore {
    MemoryQuestionStore::with_data(seeded_categories(), seeded_questions())
}

pub fn test_config() -> Config {
    Config {
        database_url: None,
        rust_log: "error".to_string(),
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        allowed_origins: vec!["*".to_string()],
        quiz_seed: Some(QUIZ_SEED),
    }
}

pub fn build_app(store: MemoryQuestionStore) -> Router {
    build_app_with(Arc::new(store))
}

pub fn build_app_with(store: Arc<dyn QuestionStore>) -> Router {
    routes::create_router(AppState::new(store, test_config()))
}

/// Spawns the app on a random port and returns its base URL
/// (e.g. "http://127.0.0.1:12345").
pub async fn spawn_app(store: MemoryQuestionStore) -> String {
    spawn_app_with(Arc::new(store)).await
}

pub async fn spawn_app_with(store: Arc<dyn QuestionStore>) -> String {
    let app = build_app_with(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://127.0.0.1:{}", port)
}

pub async fn spawn_seeded_app() -> String {
    spawn_app(seeded_store()).await
}

/// Sends one request straight through the router.
pub async fn send(app: Router, method: &str, uri: &str) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body is not JSON")
}

pub fn ids(value: &serde_json::Value) -> Vec<i64> {
    value
        .as_array()
        .expect("expected a JSON array")
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect()
}
