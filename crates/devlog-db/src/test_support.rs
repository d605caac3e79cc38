//! Shared fixtures for the repo unit tests.

use chrono::NaiveDate;
use devlog_core::entities::{Developer, TimeEntry};
use devlog_core::enums::{Mood, Role};

use crate::LogDb;
use crate::repos::developer::NewDeveloper;
use crate::repos::daily_log::NewLog;

/// In-memory database with migrations applied.
pub async fn test_db() -> LogDb {
    LogDb::open_local(":memory:").await.unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A manager with `reports` developers under them.
pub async fn seed_team(db: &LogDb, reports: usize) -> (Developer, Vec<Developer>) {
    let manager = db
        .create_developer(&NewDeveloper {
            first_name: "Morgan".into(),
            last_name: "Lead".into(),
            email: "morgan@example.com".into(),
            role: Role::Manager,
            manager_id: None,
        })
        .await
        .unwrap();

    let mut developers = Vec::with_capacity(reports);
    for idx in 0..reports {
        let dev = db
            .create_developer(&NewDeveloper {
                first_name: format!("Dev{idx}"),
                last_name: "Person".into(),
                email: format!("dev{idx}@example.com"),
                role: Role::Developer,
                manager_id: Some(manager.id.clone()),
            })
            .await
            .unwrap();
        developers.push(dev);
    }
    (manager, developers)
}

pub fn new_log(developer_id: &str, log_date: NaiveDate, blockers: Option<&str>) -> NewLog {
    NewLog {
        developer_id: developer_id.to_string(),
        log_date,
        tasks: "<p>Worked on the thing</p>".into(),
        time_spent: vec![TimeEntry {
            task_id: "t1".into(),
            hours: 2,
            minutes: 30,
        }],
        mood: Mood::Good,
        blockers: blockers.map(String::from),
    }
}
