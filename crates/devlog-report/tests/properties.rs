//! Property checks for the statistics and scope rules.

use chrono::{NaiveDate, Utc};
use devlog_core::entities::{Developer, LogRecord, TimeEntry};
use devlog_core::enums::{Mood, Role};
use devlog_report::filter::{LogFilter, filter};
use devlog_report::stats::{mood_histogram, total_hours};
use devlog_report::AccessScope;
use proptest::prelude::*;

fn developer(id: &str) -> Developer {
    Developer {
        id: id.into(),
        first_name: id.into(),
        last_name: "Prop".into(),
        email: format!("{id}@example.com"),
        role: Role::Developer,
        manager_id: Some("m1".into()),
        created_at: Utc::now(),
    }
}

fn arb_entry() -> impl Strategy<Value = TimeEntry> {
    (0u8..=24, 0u8..=59).prop_map(|(hours, minutes)| TimeEntry {
        task_id: "t".into(),
        hours,
        minutes,
    })
}

fn arb_record() -> impl Strategy<Value = LogRecord> {
    (
        0usize..4,
        1u32..=28,
        prop::collection::vec(arb_entry(), 0..4),
        prop::option::of("[ a-z]{0,8}"),
    )
        .prop_map(|(owner, day, time_spent, blockers)| {
            let now = Utc::now();
            LogRecord {
                id: format!("log-{owner}-{day}"),
                developer_id: format!("dev-{owner}"),
                log_date: NaiveDate::from_ymd_opt(2024, 2, day).unwrap(),
                tasks: "prop".into(),
                time_spent,
                mood: Mood::Neutral,
                blockers,
                is_reviewed: false,
                review_comment: None,
                created_at: now,
                updated_at: now,
            }
        })
}

proptest! {
    #[test]
    fn total_hours_is_additive(
        a in prop::collection::vec(arb_record(), 0..10),
        b in prop::collection::vec(arb_record(), 0..10),
    ) {
        let combined: Vec<LogRecord> = a.iter().chain(&b).cloned().collect();
        let sum = total_hours(&a) + total_hours(&b);
        prop_assert!((total_hours(&combined) - sum).abs() < 1e-9);
    }

    #[test]
    fn developer_filter_outside_scope_is_empty(
        records in prop::collection::vec(arb_record(), 0..20),
        outsider in "dev-[4-9]",
    ) {
        // Scope covers dev-0 and dev-1; generated owners never exceed dev-3.
        let scope = AccessScope::new("m1", vec![developer("dev-0"), developer("dev-1")]);
        let kept = filter(records.clone(), &scope, &LogFilter::default().for_developer(outsider));
        prop_assert!(kept.is_empty());

        let kept = filter(records, &scope, &LogFilter::default().for_developer("dev-2"));
        prop_assert!(kept.is_empty());
    }

    #[test]
    fn filtered_records_never_leave_scope(
        records in prop::collection::vec(arb_record(), 0..20),
        with_blockers in any::<bool>(),
    ) {
        let scope = AccessScope::new("m1", vec![developer("dev-0"), developer("dev-3")]);
        let kept = filter(records, &scope, &LogFilter::default().with_blockers(with_blockers));
        prop_assert!(kept.iter().all(|r| scope.contains(&r.developer_id)));
        if with_blockers {
            prop_assert!(kept.iter().all(LogRecord::has_blocker));
        }
    }

    #[test]
    fn uniform_mood_histogram_has_one_key(count in 1usize..20) {
        let records: Vec<LogRecord> = (0..count)
            .map(|i| {
                let now = Utc::now();
                LogRecord {
                    id: format!("log-{i}"),
                    developer_id: "dev-0".into(),
                    log_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    tasks: String::new(),
                    time_spent: vec![],
                    mood: Mood::Great,
                    blockers: None,
                    is_reviewed: false,
                    review_comment: None,
                    created_at: now,
                    updated_at: now,
                }
            })
            .collect();
        let histogram = mood_histogram(&records);
        prop_assert_eq!(histogram.len(), 1);
        prop_assert_eq!(histogram.get(&Mood::Great).copied(), Some(count));
    }
}
