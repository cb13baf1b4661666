pub mod analytics;
pub mod gamification;
pub mod review;
pub mod user;
pub mod wordlist;

pub use analytics::AnalyticsRepository;
pub use gamification::GamificationRepository;
pub use review::{ReviewStore, SqliteReviewStore};
pub use user::UserRepository;
pub use wordlist::WordlistRepository;
