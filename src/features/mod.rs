mod errors;
pub mod gamification;
pub mod spelling;
