use axum::http::StatusCode;
use serde_json::json;

mod common;
use common::TestApp;

const STUDENT: i32 = 3;

#[tokio::test]
async fn new_learner_has_empty_queue() {
    let app = TestApp::new();

    let (status, items) = app.get(&format!("/api/learners/{STUDENT}/reviews")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(items, json!([]));

    let (status, next) = app.get(&format!("/api/learners/{STUDENT}/reviews/next")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(next.is_null());
}

#[tokio::test]
async fn added_item_starts_with_defaults() {
    let app = TestApp::new();

    let (status, item) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews"),
            json!({ "content": "ephemeral" }),
        )
        .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(item["id"], 1);
    assert_eq!(item["content"], "ephemeral");
    assert_eq!(item["difficulty"], 0.5);
    assert_eq!(item["repetitions"], 0);
    assert_eq!(item["intervalDays"], 1);
    assert_eq!(item["easeFactor"], 2.5);
    assert_eq!(item["nextReview"], "2025-11-01T09:00:00Z");
    assert!(item["lastReviewed"].is_null());
}

#[tokio::test]
async fn add_item_rejects_out_of_range_difficulty() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews"),
            json!({ "content": "ephemeral", "difficulty": 2.0 }),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn answering_schedules_next_review() {
    let app = TestApp::new();
    app.post(
        &format!("/api/learners/{STUDENT}/reviews"),
        json!({ "content": "apple" }),
    )
    .await;

    let (status, outcome) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({ "quality": 4 }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["quality"], 4);
    let item = &outcome["item"];
    assert_eq!(item["repetitions"], 1);
    assert_eq!(item["intervalDays"], 1);
    assert_eq!(item["correctCount"], 1);
    assert_eq!(item["lastReviewed"], "2025-11-01T09:00:00Z");
    assert_eq!(item["nextReview"], "2025-11-02T09:00:00Z");

    // persisted
    let (_, items) = app.get(&format!("/api/learners/{STUDENT}/reviews")).await;
    assert_eq!(items[0]["repetitions"], 1);

    let (_, second) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({ "quality": 5 }),
        )
        .await;
    assert_eq!(second["item"]["repetitions"], 2);
    assert_eq!(second["item"]["intervalDays"], 6);
    assert_eq!(second["item"]["nextReview"], "2025-11-07T09:00:00Z");
}

#[tokio::test]
async fn invalid_quality_and_missing_item_are_rejected() {
    let app = TestApp::new();
    app.post(
        &format!("/api/learners/{STUDENT}/reviews"),
        json!({ "content": "apple" }),
    )
    .await;

    let (status, _) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({ "quality": 6 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({}),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/42/answer"),
            json!({ "quality": 5 }),
        )
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);

    // nothing changed
    let (_, items) = app.get(&format!("/api/learners/{STUDENT}/reviews")).await;
    assert_eq!(items[0]["repetitions"], 0);
    assert!(items[0]["lastReviewed"].is_null());
}

#[tokio::test]
async fn typed_attempt_is_graded() {
    let app = TestApp::new();
    app.post(
        &format!("/api/learners/{STUDENT}/reviews"),
        json!({ "content": "serendipity" }),
    )
    .await;

    let (status, outcome) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({ "attempt": "serendipaty" }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["quality"], 2);
    assert_eq!(outcome["item"]["incorrectCount"], 1);
    assert_eq!(outcome["item"]["repetitions"], 0);

    let (_, outcome) = app
        .post(
            &format!("/api/learners/{STUDENT}/reviews/1/answer"),
            json!({ "attempt": "serendipity" }),
        )
        .await;
    assert_eq!(outcome["quality"], 5);
    assert_eq!(outcome["item"]["correctCount"], 1);
}

#[tokio::test]
async fn next_skips_scheduled_items() {
    let app = TestApp::new();
    for word in ["dog", "cat"] {
        app.post(
            &format!("/api/learners/{STUDENT}/reviews"),
            json!({ "content": word }),
        )
        .await;
    }

    let (_, next) = app.get(&format!("/api/learners/{STUDENT}/reviews/next")).await;
    assert_eq!(next["content"], "dog");

    app.post(
        &format!("/api/learners/{STUDENT}/reviews/1/answer"),
        json!({ "quality": 5 }),
    )
    .await;

    let (_, next) = app.get(&format!("/api/learners/{STUDENT}/reviews/next")).await;
    assert_eq!(next["content"], "cat");
}

#[tokio::test]
async fn stats_and_reset() {
    let app = TestApp::new();
    for word in ["red", "blue", "green"] {
        app.post(
            &format!("/api/learners/{STUDENT}/reviews"),
            json!({ "content": word }),
        )
        .await;
    }
    app.post(
        &format!("/api/learners/{STUDENT}/reviews/1/answer"),
        json!({ "quality": 5 }),
    )
    .await;
    app.post(
        &format!("/api/learners/{STUDENT}/reviews/2/answer"),
        json!({ "quality": 0 }),
    )
    .await;

    let (status, stats) = app.get(&format!("/api/learners/{STUDENT}/reviews/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({ "total": 3, "mastered": 0, "learning": 1, "new": 2, "dueToday": 1 })
    );

    let (status, items) = app
        .post(&format!("/api/learners/{STUDENT}/reviews/reset"), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    for (item, word) in items.as_array().unwrap().iter().zip(["red", "blue", "green"]) {
        assert_eq!(item["content"], word);
        assert_eq!(item["repetitions"], 0);
        assert_eq!(item["correctCount"], 0);
        assert_eq!(item["incorrectCount"], 0);
        assert_eq!(item["easeFactor"], 2.5);
        assert!(item["lastReviewed"].is_null());
    }

    let (_, stats) = app.get(&format!("/api/learners/{STUDENT}/reviews/stats")).await;
    assert_eq!(stats["new"], 3);
    assert_eq!(stats["dueToday"], 3);
}

#[tokio::test]
async fn importing_a_wordlist_skips_known_words() {
    let app = TestApp::new();
    app.post(
        &format!("/api/learners/{STUDENT}/reviews"),
        json!({ "content": "Banana" }),
    )
    .await;

    let (status, outcome) = app
        .post(&format!("/api/learners/{STUDENT}/reviews/import/1"), json!({}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(outcome["added"].as_array().unwrap().len(), 9);
    assert_eq!(outcome["skipped"], 1);
    assert_eq!(outcome["added"][0]["content"], "apple");
    assert_eq!(outcome["added"][0]["id"], 2);

    let (_, again) = app
        .post(&format!("/api/learners/{STUDENT}/reviews/import/1"), json!({}))
        .await;
    assert_eq!(again["added"], json!([]));
    assert_eq!(again["skipped"], 10);

    let (status, _) = app
        .post(&format!("/api/learners/{STUDENT}/reviews/import/99"), json!({}))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_learner_is_not_found() {
    let app = TestApp::new();

    let (status, _) = app.get("/api/learners/999/reviews").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app
        .post("/api/learners/999/reviews", json!({ "content": "apple" }))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn queues_are_separate_per_learner() {
    let app = TestApp::new();
    app.post("/api/learners/3/reviews", json!({ "content": "fish" })).await;
    let (_, item) = app
        .post("/api/learners/4/reviews", json!({ "content": "horse" }))
        .await;
    assert_eq!(item["id"], 1);

    app.post("/api/learners/4/reviews/1/answer", json!({ "quality": 5 }))
        .await;

    let (_, items) = app.get("/api/learners/3/reviews").await;
    assert_eq!(items[0]["content"], "fish");
    assert_eq!(items[0]["repetitions"], 0);
}

#[tokio::test]
async fn long_perfect_streak_is_capped_and_stored() {
    let app = TestApp::new();
    let base = format!("/api/learners/{STUDENT}/reviews");
    app.post(&base, json!({ "content": "ubiquitous" })).await;

    let mut last = serde_json::Value::Null;
    for _ in 0..40 {
        let (status, outcome) = app
            .post(&format!("{base}/1/answer"), json!({ "quality": 5 }))
            .await;
        assert_eq!(status, StatusCode::OK);
        last = outcome;
    }

    assert_eq!(last["item"]["repetitions"], 40);
    assert_eq!(last["item"]["intervalDays"], 36_500);

    let (_, items) = app.get(&base).await;
    assert_eq!(items[0]["intervalDays"], 36_500);
    assert_eq!(items[0]["nextReview"], last["item"]["nextReview"]);
}
