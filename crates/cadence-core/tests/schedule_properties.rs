//! Property tests for the evaluator, search and streak invariants.

use cadence_core::{
    CompletionRecord, Commitment, Formatter, RepeatKind, Schedule, StreakCalculator,
    DEFAULT_NEXT_HORIZON_DAYS, DEFAULT_PREV_HORIZON_DAYS,
};
use chrono::{Duration, NaiveDate};
use proptest::collection::{btree_set, vec};
use proptest::option;
use proptest::prelude::*;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn offset_date(days: i64) -> NaiveDate {
    epoch() + Duration::days(days)
}

fn repeat_strategy() -> impl Strategy<Value = Option<RepeatKind>> {
    option::of(prop_oneof![
        Just(RepeatKind::Daily),
        Just(RepeatKind::Weekdays),
        Just(RepeatKind::Weekends),
        Just(RepeatKind::CustomWeekdays),
        Just(RepeatKind::IntervalDays),
    ])
}

prop_compose! {
    fn schedule_strategy()(
        repeat in repeat_strategy(),
        days_of_week in btree_set(0u8..7, 0..7),
        interval_days in option::of(0u32..15),
        start in option::of(0i64..120),
        end_after_start in option::of(0i64..200),
    ) -> Schedule {
        let start_date = start.map(offset_date);
        let end_date = match (start, end_after_start) {
            (Some(s), Some(e)) => Some(offset_date(s + e)),
            _ => None,
        };
        Schedule { repeat, days_of_week, interval_days, start_date, end_date }
    }
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (-30i64..400).prop_map(offset_date)
}

proptest! {
    #[test]
    fn due_implies_within_range(schedule in schedule_strategy(), date in date_strategy()) {
        if schedule.is_due_on(date) {
            prop_assert!(schedule.is_within_range(date));
            let start = schedule.start_date.unwrap();
            prop_assert!(date >= start);
            if let Some(end) = schedule.end_date {
                prop_assert!(date <= end);
            }
        }
    }

    #[test]
    fn next_due_is_on_or_after_and_due(schedule in schedule_strategy(), from in date_strategy()) {
        if let Some(next) = schedule.next_due_date(from, DEFAULT_NEXT_HORIZON_DAYS) {
            prop_assert!(next >= from);
            prop_assert!(next <= from + Duration::days(i64::from(DEFAULT_NEXT_HORIZON_DAYS)));
            prop_assert!(schedule.is_due_on(next));
        }
    }

    #[test]
    fn prev_due_is_strictly_before_and_due(schedule in schedule_strategy(), from in date_strategy()) {
        if let Some(prev) = schedule.prev_due_date(from, DEFAULT_PREV_HORIZON_DAYS) {
            prop_assert!(prev < from);
            prop_assert!(schedule.is_due_on(prev));
        }
    }

    #[test]
    fn best_streak_never_below_baseline(
        schedule in option::of(schedule_strategy()),
        days in vec(0i64..200, 0..40),
        baseline in option::of(0u32..50),
    ) {
        let commitment = Commitment {
            schedule,
            completions: days.into_iter().map(offset_date).collect::<CompletionRecord>(),
            best_streak_baseline: baseline,
        };
        let best = StreakCalculator::new().best_streak(&commitment);
        prop_assert!(best >= baseline.unwrap_or(0));
    }

    #[test]
    fn current_streak_zero_without_completions(schedule in schedule_strategy(), today in date_strategy()) {
        let commitment = Commitment::new(schedule);
        prop_assert_eq!(commitment.current_streak(today), 0);
    }

    #[test]
    fn current_streak_never_exceeds_best(
        schedule in schedule_strategy(),
        days in vec(0i64..200, 0..40),
        today in date_strategy(),
    ) {
        let commitment = Commitment::new(schedule)
            .with_completions(days.into_iter().map(offset_date).collect());
        let calculator = StreakCalculator::new();
        prop_assert!(calculator.current_streak(&commitment, today) <= calculator.best_streak(&commitment));
    }

    #[test]
    fn formatting_is_deterministic(schedule in schedule_strategy(), reference in date_strategy()) {
        let formatter = Formatter::new();
        prop_assert_eq!(
            formatter.schedule_summary(&schedule, reference),
            formatter.schedule_summary(&schedule, reference)
        );
        prop_assert_eq!(
            formatter.next_due_label(&schedule, reference),
            formatter.next_due_label(&schedule, reference)
        );
    }
}
