pub mod analytics;
pub mod gamification;
pub mod reviews;
pub mod users;
pub mod wordlists;
