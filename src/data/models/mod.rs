pub mod analytics_models;
pub mod error_models;
pub mod gamification_models;
pub mod review_models;
pub mod user_models;
pub mod wordlist_models;

pub use analytics_models::{AnalyticsRow, AnalyticsSnapshot};
pub use error_models::ApiError;
pub use gamification_models::{AddPointsRequest, GamificationRow, LeaderboardEntry};
pub use review_models::{AddItemRequest, AnswerOutcome, AnswerRequest, ImportOutcome, ReviewItemRow};
pub use user_models::{CreateUserRequest, NewUser, Role, UpdateUserRequest, User, UserProfile};
pub use wordlist_models::{
    CreateWordlistRequest, NewWordlist, UpdateWordlistRequest, Wordlist, WordlistRow,
};
