pub mod engine;

pub use engine::{BADGES, GamificationProfile, MAX_POINTS, ProfileView, find_badge};
