use axum::{
    Router,
    routing::{get, post},
};
use diesel::{
    SqliteConnection,
    r2d2::{ConnectionManager, Pool},
};
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

pub mod config;
pub mod data;
pub mod features;
pub mod handlers;
pub mod schema;
pub mod spaced_repetition_system;
pub mod utils;

use handlers::{analytics, gamification, reviews, users, wordlists};
use spaced_repetition_system::Clock;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Shared handler state: the connection pool and the clock every scheduler call reads
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        AppState { pool, clock }
    }
}

/// JSON API only, mounted at `/api`
pub fn api_router(state: AppState) -> Router {
    let users_router = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{user_id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        );

    let wordlists_router = Router::new()
        .route("/", get(wordlists::list_wordlists).post(wordlists::create_wordlist))
        .route(
            "/{wordlist_id}",
            get(wordlists::get_wordlist)
                .put(wordlists::update_wordlist)
                .delete(wordlists::delete_wordlist),
        );

    let learners_router = Router::new()
        .route(
            "/{learner_id}/reviews",
            get(reviews::list_items).post(reviews::add_item),
        )
        .route("/{learner_id}/reviews/next", get(reviews::next_item))
        .route("/{learner_id}/reviews/stats", get(reviews::stats))
        .route("/{learner_id}/reviews/reset", post(reviews::reset_items))
        .route(
            "/{learner_id}/reviews/import/{wordlist_id}",
            post(reviews::import_wordlist),
        )
        .route(
            "/{learner_id}/reviews/{item_id}/answer",
            post(reviews::answer_item),
        )
        .route("/{learner_id}/gamification", get(gamification::get_profile))
        .route(
            "/{learner_id}/gamification/points",
            post(gamification::add_points),
        )
        .route(
            "/{learner_id}/gamification/badges/{badge_id}",
            post(gamification::earn_badge),
        )
        .route(
            "/{learner_id}/gamification/reset",
            post(gamification::reset_profile),
        );

    let analytics_router = Router::new().route(
        "/{user_id}",
        get(analytics::get_analytics)
            .post(analytics::save_analytics)
            .delete(analytics::reset_analytics),
    );

    Router::new()
        .nest("/users", users_router)
        .nest("/wordlists", wordlists_router)
        .nest("/learners", learners_router)
        .nest("/analytics", analytics_router)
        .route("/leaderboard", get(gamification::leaderboard))
        .with_state(state)
}

/// Full application: the API plus the built client served from `static_dir`.
/// Unknown paths fall back to `index.html` for client-side routing.
pub fn app(state: AppState, static_dir: &str) -> Router {
    let client = ServeDir::new(static_dir)
        .fallback(ServeFile::new(format!("{}/index.html", static_dir)));

    Router::new()
        .nest("/api", api_router(state))
        .fallback_service(client)
}
