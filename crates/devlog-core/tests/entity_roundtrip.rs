//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::{NaiveDate, Utc};
use schemars::schema_for;
use devlog_core::entities::*;
use devlog_core::enums::*;
use devlog_core::responses::*;
use devlog_core::store::DateRange;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_log(mood: Mood, blockers: Option<&str>) -> LogRecord {
    let now = Utc::now();
    LogRecord {
        id: "log-a3f8b2c1".into(),
        developer_id: "dev-0c1d2e3f".into(),
        log_date: NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
        tasks: "<ul><li>Reviewed PR #42, \"auth\" module</li></ul>".into(),
        time_spent: vec![
            TimeEntry {
                task_id: "t-1".into(),
                hours: 2,
                minutes: 30,
            },
            TimeEntry {
                task_id: "t-2".into(),
                hours: 0,
                minutes: 45,
            },
        ],
        mood,
        blockers: blockers.map(String::from),
        is_reviewed: false,
        review_comment: None,
        created_at: now,
        updated_at: now,
    }
}

roundtrip_and_validate!(
    developer_roundtrip,
    Developer,
    Developer {
        id: "dev-0c1d2e3f".into(),
        first_name: "Grace".into(),
        last_name: "Hopper".into(),
        email: "grace@example.com".into(),
        role: Role::Developer,
        manager_id: Some("dev-99aa88bb".into()),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    manager_without_manager_roundtrip,
    Developer,
    Developer {
        id: "dev-99aa88bb".into(),
        first_name: "Alan".into(),
        last_name: "Kay".into(),
        email: "alan@example.com".into(),
        role: Role::Manager,
        manager_id: None,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    log_record_roundtrip,
    LogRecord,
    sample_log(Mood::NotGreat, Some("Waiting on staging, again"))
);

roundtrip_and_validate!(
    log_record_unrecognized_mood_roundtrip,
    LogRecord,
    sample_log(Mood::Unrecognized("MEH".into()), None)
);

roundtrip_and_validate!(
    date_range_roundtrip,
    DateRange,
    DateRange::new(
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
    )
    .unwrap()
);

roundtrip_and_validate!(
    team_logs_response_roundtrip,
    TeamLogsResponse,
    TeamLogsResponse {
        manager_id: "dev-99aa88bb".into(),
        count: 1,
        logs: vec![sample_log(Mood::Great, None)],
    }
);

roundtrip_and_validate!(
    report_written_response_roundtrip,
    ReportWrittenResponse,
    ReportWrittenResponse {
        manager_id: "dev-99aa88bb".into(),
        start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2024, 1, 7).unwrap(),
        format: ReportFormat::Pdf,
        content_type: "application/pdf".into(),
        filename: "weekly-report-2024-01-01-to-2024-01-07.pdf".into(),
        path: "/tmp/weekly-report-2024-01-01-to-2024-01-07.pdf".into(),
        bytes: 18_432,
    }
);

#[test]
fn time_entries_use_camel_case_keys() {
    let value = serde_json::to_value(sample_log(Mood::Good, None)).unwrap();
    let entry = &value["time_spent"][0];
    assert_eq!(entry["taskId"], "t-1");
    assert_eq!(entry["hours"], 2);
    assert_eq!(entry["minutes"], 30);
}

#[test]
fn mood_serializes_as_storage_value() {
    let value = serde_json::to_value(sample_log(Mood::NotGreat, None)).unwrap();
    assert_eq!(value["mood"], "NOT_GREAT");
}
