// spaced_repetition_system.rs
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ease factor given to every new or reset item
pub const DEFAULT_EASE_FACTOR: f64 = 2.5;
/// Floor for the ease factor, whatever the answer history
pub const MIN_EASE_FACTOR: f64 = 1.3;
pub const DEFAULT_DIFFICULTY: f64 = 0.5;
/// Consecutive successes after which an item counts as mastered
pub const MASTERED_REPETITIONS: u32 = 5;
/// Longest gap between two reviews, about a hundred years
pub const MAX_INTERVAL_DAYS: u32 = 36_500;

#[derive(Error, Debug, PartialEq)]
pub enum SrsError {
    #[error("Review item {0} not found")]
    NotFound(ItemId),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Identifier of a review item, unique within one learner's collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i32);

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Recall rating of one review attempt, always within 0..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: u8 = 5;
    /// Lowest rating that counts as a successful recall
    pub const PASS: u8 = 3;

    pub const PERFECT: Quality = Quality(5);
    pub const HESITANT: Quality = Quality(4);
    pub const DIFFICULT: Quality = Quality(3);
    pub const NEAR_MISS: Quality = Quality(2);
    pub const FAMILIAR: Quality = Quality(1);
    pub const BLACKOUT: Quality = Quality(0);

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_success(self) -> bool {
        self.0 >= Self::PASS
    }
}

impl TryFrom<i32> for Quality {
    type Error = SrsError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if (0..=Self::MAX as i32).contains(&value) {
            Ok(Quality(value as u8))
        } else {
            Err(SrsError::InvalidInput(format!(
                "quality must be between 0 and 5, got {}",
                value
            )))
        }
    }
}

/// Scheduling state of one learning item for one learner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewItem {
    pub id: ItemId,
    pub content: String,
    pub difficulty: f64,
    pub repetitions: u32,
    pub interval_days: u32,
    pub ease_factor: f64,
    pub next_review: DateTime<Utc>,
    pub last_reviewed: Option<DateTime<Utc>>,
    pub correct_count: u32,
    pub incorrect_count: u32,
}

impl ReviewItem {
    /// Creates an item that is new and immediately eligible for review
    pub fn new(id: ItemId, content: impl Into<String>, difficulty: f64, now: DateTime<Utc>) -> Self {
        ReviewItem {
            id,
            content: content.into(),
            difficulty,
            repetitions: 0,
            interval_days: 1,
            ease_factor: DEFAULT_EASE_FACTOR,
            next_review: now,
            last_reviewed: None,
            correct_count: 0,
            incorrect_count: 0,
        }
    }

    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.next_review <= now
    }

    pub fn is_new(&self) -> bool {
        self.repetitions == 0
    }

    /// Returns the state this item moves to after an answer graded `quality` at `now`.
    ///
    /// SM-2: a success grows the interval (1 day, 6 days, then interval * ease)
    /// and nudges the ease factor; a lapse resets repetitions and the interval
    /// and lowers the ease factor by 0.2.
    pub fn answered(&self, quality: Quality, now: DateTime<Utc>) -> ReviewItem {
        let mut next = self.clone();
        next.last_reviewed = Some(now);

        if quality.is_success() {
            next.correct_count += 1;
            next.repetitions += 1;

            next.interval_days = match next.repetitions {
                1 => 1,
                2 => 6,
                // Uses the ease factor from before this answer
                _ => ((self.interval_days as f64 * self.ease_factor).round() as u32)
                    .clamp(1, MAX_INTERVAL_DAYS),
            };

            let miss = (Quality::MAX - quality.value()) as f64;
            next.ease_factor =
                (self.ease_factor + (0.1 - miss * (0.08 + miss * 0.02))).max(MIN_EASE_FACTOR);
        } else {
            next.incorrect_count += 1;
            next.repetitions = 0;
            next.interval_days = 1;
            next.ease_factor = (self.ease_factor - 0.2).max(MIN_EASE_FACTOR);
        }

        next.next_review = now
            .checked_add_signed(Duration::days(next.interval_days as i64))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        next
    }

    /// Clears all scheduling state, keeping id, content and difficulty
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.repetitions = 0;
        self.interval_days = 1;
        self.ease_factor = DEFAULT_EASE_FACTOR;
        self.next_review = now;
        self.last_reviewed = None;
        self.correct_count = 0;
        self.incorrect_count = 0;
    }
}

/// Source of the current time, injected so scheduling stays deterministic
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at one instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Produces identifiers for newly added items
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic counter continuing after the highest id already in a collection
#[derive(Debug, Clone)]
pub struct SequentialIds {
    last: i32,
}

impl SequentialIds {
    pub fn after(items: &[ReviewItem]) -> Self {
        let last = items.iter().map(|item| item.id.0).max().unwrap_or(0);
        SequentialIds { last }
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        self.last += 1;
        ItemId(self.last)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStats {
    pub total: usize,
    pub mastered: usize,
    pub learning: usize,
    pub new: usize,
    pub due_today: usize,
}

/// Picks the next item to present.
///
/// The first due item in collection order wins; failing that, the first new
/// item in collection order. Items are never sorted by due date.
pub fn select_next(items: &[ReviewItem], now: DateTime<Utc>) -> Option<&ReviewItem> {
    items
        .iter()
        .find(|item| item.is_due(now))
        .or_else(|| items.iter().find(|item| item.is_new()))
}

/// Applies one graded answer to the item with `id`.
///
/// The collection is left untouched when the item does not exist.
pub fn process_answer(
    items: &mut [ReviewItem],
    id: ItemId,
    quality: Quality,
    now: DateTime<Utc>,
) -> Result<&ReviewItem, SrsError> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or(SrsError::NotFound(id))?;

    *item = item.answered(quality, now);
    Ok(&*item)
}

/// Appends a new item to the collection.
///
/// `difficulty` defaults to 0.5 and must lie within [0, 1].
pub fn add_item<'a>(
    items: &'a mut Vec<ReviewItem>,
    ids: &mut impl IdGenerator,
    content: &str,
    difficulty: Option<f64>,
    now: DateTime<Utc>,
) -> Result<&'a ReviewItem, SrsError> {
    let content = content.trim();
    if content.is_empty() {
        return Err(SrsError::InvalidInput("content must not be empty".into()));
    }

    let difficulty = difficulty.unwrap_or(DEFAULT_DIFFICULTY);
    if !(0.0..=1.0).contains(&difficulty) {
        return Err(SrsError::InvalidInput(format!(
            "difficulty must be between 0 and 1, got {}",
            difficulty
        )));
    }

    items.push(ReviewItem::new(ids.next_id(), content, difficulty, now));
    Ok(&items[items.len() - 1])
}

pub fn reset_all(items: &mut [ReviewItem], now: DateTime<Utc>) {
    for item in items.iter_mut() {
        item.reset(now);
    }
}

pub fn compute_stats(items: &[ReviewItem], now: DateTime<Utc>) -> ReviewStats {
    let mut stats = ReviewStats {
        total: items.len(),
        mastered: 0,
        learning: 0,
        new: 0,
        due_today: 0,
    };

    for item in items {
        match item.repetitions {
            0 => stats.new += 1,
            r if r >= MASTERED_REPETITIONS => stats.mastered += 1,
            _ => stats.learning += 1,
        }
        if item.is_due(now) {
            stats.due_today += 1;
        }
    }

    stats
}
