use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::data::models::GamificationRow;

pub const BADGE_BONUS_POINTS: i64 = 100;
/// Ceiling for points, experience and thresholds; matches the storage columns
pub const MAX_POINTS: i64 = i32::MAX as i64;
const STARTING_THRESHOLD: i64 = 100;

pub struct BadgeDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub static BADGES: &[BadgeDefinition] = &[
    BadgeDefinition {
        id: "first-session",
        name: "First Steps",
        description: "Complete your first spelling session",
        icon: "🎯",
    },
    BadgeDefinition {
        id: "perfect-score",
        name: "Perfectionist",
        description: "Get 100% accuracy in a session",
        icon: "⭐",
    },
    BadgeDefinition {
        id: "streak-master",
        name: "Streak Master",
        description: "Maintain a 7-day learning streak",
        icon: "🔥",
    },
    BadgeDefinition {
        id: "word-collector",
        name: "Word Collector",
        description: "Master 100 words",
        icon: "📚",
    },
    BadgeDefinition {
        id: "speed-demon",
        name: "Speed Demon",
        description: "Complete 50 words in under 5 minutes",
        icon: "⚡",
    },
    BadgeDefinition {
        id: "consistent-learner",
        name: "Consistent Learner",
        description: "Practice for 30 consecutive days",
        icon: "📅",
    },
    BadgeDefinition {
        id: "perfect-verse",
        name: "Scripture Master",
        description: "Type a Bible verse with 100% accuracy",
        icon: "📖",
    },
];

pub fn find_badge(id: &str) -> Option<&'static BadgeDefinition> {
    BADGES.iter().find(|badge| badge.id == id)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EarnedBadge {
    pub id: String,
    pub earned_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GamificationProfile {
    pub points: i64,
    pub level: u32,
    pub experience: i64,
    pub experience_to_next: i64,
    pub badges: Vec<EarnedBadge>,
}

impl Default for GamificationProfile {
    fn default() -> Self {
        GamificationProfile {
            points: 0,
            level: 1,
            experience: 0,
            experience_to_next: STARTING_THRESHOLD,
            badges: Vec::new(),
        }
    }
}

impl GamificationProfile {
    /// Adds points and experience, levelling up as many times as the experience allows.
    /// Each level raises the next threshold by 20%. Totals saturate at `MAX_POINTS`.
    pub fn add_points(&mut self, amount: i64) {
        let amount = amount.max(0);
        self.points = self.points.saturating_add(amount).min(MAX_POINTS);
        self.experience = self.experience.saturating_add(amount).min(MAX_POINTS);

        while self.experience >= self.experience_to_next {
            self.level += 1;
            self.experience -= self.experience_to_next;
            self.experience_to_next =
                ((self.experience_to_next as f64 * 1.2).floor() as i64).min(MAX_POINTS);
        }
    }

    pub fn has_badge(&self, id: &str) -> bool {
        self.badges.iter().any(|badge| badge.id == id)
    }

    /// Returns false when the badge was already earned
    pub fn earn_badge(&mut self, badge: &BadgeDefinition, now: DateTime<Utc>) -> bool {
        if self.has_badge(badge.id) {
            return false;
        }
        self.badges.push(EarnedBadge {
            id: badge.id.to_string(),
            earned_date: now,
        });
        self.add_points(BADGE_BONUS_POINTS);
        true
    }

    pub fn reset(&mut self) {
        *self = GamificationProfile::default();
    }

    pub fn level_progress(&self) -> f64 {
        self.experience as f64 / self.experience_to_next as f64 * 100.0
    }

    pub fn view(&self) -> ProfileView {
        let badges = BADGES
            .iter()
            .map(|def| {
                let earned = self.badges.iter().find(|b| b.id == def.id);
                BadgeStatus {
                    id: def.id,
                    name: def.name,
                    description: def.description,
                    icon: def.icon,
                    earned: earned.is_some(),
                    earned_date: earned.map(|b| b.earned_date),
                }
            })
            .collect();

        ProfileView {
            points: self.points,
            level: self.level,
            experience: self.experience,
            experience_to_next: self.experience_to_next,
            level_progress: self.level_progress(),
            badges,
        }
    }

    pub fn from_row(row: &GamificationRow) -> Result<Self, serde_json::Error> {
        Ok(GamificationProfile {
            points: row.points as i64,
            level: row.level.max(1) as u32,
            experience: row.experience as i64,
            experience_to_next: (row.experience_to_next as i64).max(1),
            badges: serde_json::from_str(&row.badges)?,
        })
    }

    pub fn to_row(&self, learner_id: i32) -> Result<GamificationRow, serde_json::Error> {
        Ok(GamificationRow {
            learner_id,
            points: self.points.clamp(0, i32::MAX as i64) as i32,
            level: self.level.min(i32::MAX as u32) as i32,
            experience: self.experience.clamp(0, i32::MAX as i64) as i32,
            experience_to_next: self.experience_to_next.clamp(1, i32::MAX as i64) as i32,
            badges: serde_json::to_string(&self.badges)?,
        })
    }
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BadgeStatus {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub earned: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub earned_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub points: i64,
    pub level: u32,
    pub experience: i64,
    pub experience_to_next: i64,
    pub level_progress: f64,
    pub badges: Vec<BadgeStatus>,
}
