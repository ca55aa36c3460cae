//! The time-window classification engine.
//!
//! One evaluation pass maps the current instant and the stored entries to
//! three lists: courses in progress, courses whose lead-time window has been
//! entered (alert fires), and courses still ahead today. The states are not
//! mutually exclusive; an entry inside its lead-time window is both alerting
//! and upcoming.

use chrono::{Datelike, Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;
use tracing::warn;

use crate::models::{CourseEntry, hhmm};
use crate::notify::Notifier;

pub const ALERT_TITLE: &str = "Class reminder";
pub const ALERT_TIMEOUT_SECS: u64 = 10;

/// Fixed weekday table, Mon = 0 .. Sun = 6. Anything outside it is malformed
/// data and the owning entry is silently left out of every list.
pub fn weekday_ordinal(raw: &str) -> Option<u32> {
    match raw.trim() {
        "Mon" => Some(0),
        "Tue" => Some(1),
        "Wed" => Some(2),
        "Thu" => Some(3),
        "Fri" => Some(4),
        "Sat" => Some(5),
        "Sun" => Some(6),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InProgressCourse {
    pub name: String,
    pub room: String,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertedCourse {
    pub name: String,
    pub room: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpcomingCourse {
    pub name: String,
    pub room: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    /// Whole minutes until the course starts, fractional seconds discarded.
    pub remaining_minutes: i64,
}

/// Result of one evaluation pass. Never stored; the next poll recomputes it
/// from scratch.
#[derive(Debug, Default, Serialize)]
pub struct Evaluation {
    pub in_progress: Vec<InProgressCourse>,
    pub alerting: Vec<AlertedCourse>,
    pub upcoming: Vec<UpcomingCourse>,
}

/// Runs one classification pass over today's entries.
///
/// Only entries whose weekday matches `now` are considered; there is no
/// look-ahead to later days. Entries with `end_time <= start_time` form a
/// degenerate same-day window that is never rolled over to the next day.
/// The sink is invoked once per alerting entry; its failures are logged and
/// swallowed.
pub fn evaluate(now: NaiveDateTime, entries: &[CourseEntry], sink: &dyn Notifier) -> Evaluation {
    let today = now.weekday().num_days_from_monday();
    let mut result = Evaluation::default();
    let mut upcoming: Vec<(NaiveDateTime, UpcomingCourse)> = Vec::new();

    for entry in entries {
        let Some(ordinal) = weekday_ordinal(&entry.weekday) else {
            continue;
        };
        if ordinal != today {
            continue;
        }

        let course_start = now.date().and_time(entry.start_time);
        let course_end = now.date().and_time(entry.end_time);
        let remind_at = course_start - Duration::minutes(i64::from(entry.lead_minutes));

        // Half-open window: at the exact start instant the course is no
        // longer alerting, it has become in progress.
        if remind_at <= now && now < course_start {
            result.alerting.push(AlertedCourse {
                name: entry.name.clone(),
                room: entry.room.clone(),
                start_time: entry.start_time,
                end_time: entry.end_time,
            });
            dispatch_alert(sink, entry);
        }

        // Closed on both ends.
        if course_start <= now && now <= course_end {
            result.in_progress.push(InProgressCourse {
                name: entry.name.clone(),
                room: entry.room.clone(),
                end_time: entry.end_time,
            });
        }

        if now < course_start {
            // num_minutes truncates toward zero; non-negative under the guard.
            let remaining_minutes = (course_start - now).num_minutes();
            upcoming.push((
                course_start,
                UpcomingCourse {
                    name: entry.name.clone(),
                    room: entry.room.clone(),
                    start_time: entry.start_time,
                    remaining_minutes,
                },
            ));
        }
    }

    upcoming.sort_by_key(|(start, _)| *start);
    result.upcoming = upcoming.into_iter().map(|(_, course)| course).collect();
    result
}

/// Best effort: a sink that cannot deliver does not stop the pass.
fn dispatch_alert(sink: &dyn Notifier, entry: &CourseEntry) {
    let message = format!(
        "Course: {}\nRoom: {}\nStarts at: {}\nPlease get ready!",
        entry.name,
        entry.room,
        entry.start_time.format("%H:%M"),
    );
    if let Err(e) = sink.notify(ALERT_TITLE, &message, ALERT_TIMEOUT_SECS) {
        warn!("course alert delivery failed for {}: {}", entry.name, e);
    }
}
