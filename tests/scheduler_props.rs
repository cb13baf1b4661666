use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use spell_trainer::spaced_repetition_system::{
    ItemId, MAX_INTERVAL_DAYS, MIN_EASE_FACTOR, Quality, ReviewItem, compute_stats,
    process_answer, reset_all,
};

fn start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 0, 0, 0).unwrap()
}

fn arb_item() -> impl Strategy<Value = ReviewItem> {
    (
        1i32..1000,
        0u32..12,
        1u32..400,
        1.3f64..3.5,
        -30i64..30,
        0.0f64..=1.0,
    )
        .prop_map(|(id, repetitions, interval_days, ease_factor, offset, difficulty)| {
            ReviewItem {
                repetitions,
                interval_days,
                ease_factor,
                next_review: start() + Duration::days(offset),
                ..ReviewItem::new(ItemId(id), format!("word{}", id), difficulty, start())
            }
        })
}

proptest! {
    #[test]
    fn ease_and_interval_stay_in_bounds(
        qualities in prop::collection::vec(prop_oneof![3 => Just(5i32), 1 => 0i32..=5], 1..80)
    ) {
        let mut item = ReviewItem::new(ItemId(1), "labyrinthine", 0.5, start());
        let mut now = start();

        for q in qualities {
            let quality = Quality::try_from(q).unwrap();
            item = item.answered(quality, now);

            prop_assert!(item.ease_factor >= MIN_EASE_FACTOR);
            prop_assert!(item.interval_days >= 1);
            prop_assert!(item.interval_days <= MAX_INTERVAL_DAYS);
            prop_assert_eq!(item.next_review, now + Duration::days(item.interval_days as i64));
            if !quality.is_success() {
                prop_assert_eq!(item.repetitions, 0);
            }
            now = item.next_review;
        }
    }

    #[test]
    fn replaying_an_answer_is_deterministic(item in arb_item(), q in 0i32..=5, hours in 0i64..10_000) {
        let quality = Quality::try_from(q).unwrap();
        let now = start() + Duration::hours(hours);

        let mut first = vec![item.clone()];
        let mut second = vec![item.clone()];
        let a = process_answer(&mut first, item.id, quality, now).unwrap().clone();
        let b = process_answer(&mut second, item.id, quality, now).unwrap().clone();

        prop_assert_eq!(a.ease_factor.to_bits(), b.ease_factor.to_bits());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn stats_partition_total(items in prop::collection::vec(arb_item(), 0..40)) {
        let stats = compute_stats(&items, start());

        prop_assert_eq!(stats.total, items.len());
        prop_assert_eq!(stats.mastered + stats.learning + stats.new, stats.total);
        prop_assert!(stats.due_today <= stats.total);
    }

    #[test]
    fn reset_clears_every_item(mut items in prop::collection::vec(arb_item(), 0..20)) {
        let before = items.clone();
        reset_all(&mut items, start());

        for (item, original) in items.iter().zip(&before) {
            prop_assert_eq!(item.id, original.id);
            prop_assert_eq!(&item.content, &original.content);
            prop_assert_eq!(item.repetitions, 0);
            prop_assert_eq!(item.interval_days, 1);
            prop_assert_eq!(item.ease_factor, 2.5);
            prop_assert_eq!(item.correct_count, 0);
            prop_assert_eq!(item.incorrect_count, 0);
            prop_assert!(item.last_reviewed.is_none());
        }
    }
}
