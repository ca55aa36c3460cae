//! End-to-end pass over the store: import, evaluate at a fixed instant,
//! delete, evaluate again.

use std::sync::Mutex;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use classbell::evaluator::{self, ALERT_TITLE};
use classbell::models::NewCourseEntry;
use classbell::notify::{Notifier, NotifyError};
use classbell::store::CourseStore;

#[derive(Default)]
struct RecordingSink {
    calls: Mutex<Vec<String>>,
}

impl Notifier for RecordingSink {
    fn notify(&self, title: &str, message: &str, _timeout: u64) -> Result<(), NotifyError> {
        assert_eq!(title, ALERT_TITLE);
        self.calls.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

fn course(name: &str, weekday: &str, start: (u32, u32), end: (u32, u32)) -> NewCourseEntry {
    NewCourseEntry {
        name: name.to_string(),
        weekday: weekday.to_string(),
        start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        room: "A201".to_string(),
        lead_minutes: 15,
    }
}

/// 2024-01-01 was a Monday.
fn monday_at(h: u32, m: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
}

#[test]
fn full_monday_morning_pass() {
    let store = CourseStore::new();
    store
        .bulk_add(vec![
            course("Math", "Mon", (9, 0), (10, 30)),
            course("Physics", "Mon", (8, 0), (9, 40)),
            course("English", "Mon", (14, 0), (15, 30)),
            course("Chemistry", "Tue", (9, 0), (10, 30)),
            course("Mystery", "周一", (9, 0), (10, 30)),
        ])
        .expect("valid batch");

    let sink = RecordingSink::default();
    let result = evaluator::evaluate(monday_at(8, 50), &store.list(), &sink);

    // Physics is running, Math is inside its lead window (and thereby also
    // upcoming), English is later today, the rest never match.
    assert_eq!(result.in_progress.len(), 1);
    assert_eq!(result.in_progress[0].name, "Physics");

    assert_eq!(result.alerting.len(), 1);
    assert_eq!(result.alerting[0].name, "Math");

    let upcoming: Vec<(&str, i64)> = result
        .upcoming
        .iter()
        .map(|c| (c.name.as_str(), c.remaining_minutes))
        .collect();
    assert_eq!(upcoming, [("Math", 10), ("English", 310)]);

    let calls = sink.calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].contains("Math"));
    assert!(calls[0].contains("09:00"));
}

#[test]
fn deletion_takes_effect_on_the_next_pass() {
    let store = CourseStore::new();
    store
        .bulk_add(vec![
            course("Math", "Mon", (9, 0), (10, 30)),
            course("Math", "Mon", (11, 0), (12, 30)),
        ])
        .expect("valid batch");

    let sink = RecordingSink::default();
    let result = evaluator::evaluate(monday_at(8, 50), &store.list(), &sink);
    assert_eq!(result.alerting.len(), 1);
    assert_eq!(result.upcoming.len(), 2);

    assert_eq!(store.remove_by_name("Math"), 2);

    let result = evaluator::evaluate(monday_at(8, 50), &store.list(), &sink);
    assert!(result.alerting.is_empty());
    assert!(result.upcoming.is_empty());
    // Only the first pass delivered an alert.
    assert_eq!(sink.calls.lock().unwrap().len(), 1);
}
