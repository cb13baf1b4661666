#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use spell_trainer::data::{db, seed};
use spell_trainer::spaced_repetition_system::FixedClock;
use spell_trainer::{AppState, api_router};

pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 11, 1, 9, 0, 0).unwrap()
}

/// Router over a fresh seeded database. Keep the `TempDir` alive for the test.
pub struct TestApp {
    pub router: Router,
    _dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.db");
        let pool = db::create_pool(path.to_str().unwrap()).unwrap();
        {
            let mut conn = pool.get().unwrap();
            db::initialize(&mut conn).unwrap();
            seed::seed_if_empty(&mut conn).unwrap();
        }

        let state = AppState::new(pool, Arc::new(FixedClock(now())));
        TestApp {
            router: Router::new().nest("/api", api_router(state)),
            _dir: dir,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request("GET", uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request("POST", uri, Some(body)).await
    }
}
