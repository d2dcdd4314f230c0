use std::{
    collections::HashMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Utc};
use http_body_util::BodyExt;
use prep_api::{assembler::AttemptSource, state::ApiState};
use prep_db::models::{AttemptAnswers, QuizBank};
use serde::Deserialize;
use tower::ServiceExt;
use uuid::Uuid;

/// In-memory attempt store standing in for PostgreSQL
#[derive(Default)]
pub struct MemoryAttemptSource {
    banks: Mutex<HashMap<Uuid, QuizBank>>,
    attempts: Mutex<HashMap<(Uuid, Uuid), Vec<AttemptAnswers>>>,
    unavailable: AtomicBool,
}

impl MemoryAttemptSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quiz and return its id
    pub fn add_quiz(&self, total_questions: Option<i32>) -> Uuid {
        let id = Uuid::new_v4();
        self.banks.lock().unwrap().insert(
            id,
            QuizBank {
                id,
                title: format!("Test quiz {id}"),
                total_questions,
            },
        );
        id
    }

    pub fn add_attempt(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
        answers: serde_json::Value,
        created_at: DateTime<Utc>,
    ) {
        self.attempts
            .lock()
            .unwrap()
            .entry((user_id, quiz_id))
            .or_default()
            .push(AttemptAnswers {
                id: Uuid::new_v4(),
                answers: Some(answers),
                created_at,
            });
    }

    /// Make every read fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), sqlx::Error> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(())
    }
}

#[async_trait]
impl AttemptSource for MemoryAttemptSource {
    async fn quiz_bank(&self, quiz_id: Uuid) -> Result<Option<QuizBank>, sqlx::Error> {
        self.check_available()?;
        Ok(self.banks.lock().unwrap().get(&quiz_id).cloned())
    }

    async fn attempts(
        &self,
        user_id: Uuid,
        quiz_id: Uuid,
    ) -> Result<Vec<AttemptAnswers>, sqlx::Error> {
        self.check_available()?;
        Ok(self
            .attempts
            .lock()
            .unwrap()
            .get(&(user_id, quiz_id))
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a test app over an in-memory source
pub fn test_app(source: Arc<MemoryAttemptSource>) -> Router {
    let state = ApiState::with_source(source);
    prep_api::router::router().with_state(state)
}

/// Helper to make requests to the test app
pub struct TestClient {
    router: Router,
}

impl TestClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    /// Send a request and get the response
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read response body")
            .to_bytes();

        TestResponse {
            status,
            body: body_bytes.to_vec(),
            headers,
        }
    }

    /// Send a GET request
    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .expect("Failed to build request");

        self.request(request).await
    }

    /// Send a POST request with JSON body
    pub async fn post_json<T: serde::Serialize>(&self, uri: &str, body: &T) -> TestResponse {
        let json_body = serde_json::to_string(body).expect("Failed to serialize body");

        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(json_body))
            .expect("Failed to build request");

        self.request(request).await
    }
}

/// Test response wrapper
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Vec<u8>,
    pub headers: axum::http::HeaderMap,
}

impl TestResponse {
    /// Get response body as string
    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).expect("Response body is not valid UTF-8")
    }

    /// Parse response body as JSON
    pub fn json<T: for<'de> Deserialize<'de>>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse JSON response")
    }

    /// Assert status code
    pub fn assert_status(&self, expected: StatusCode) {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
    }
}
