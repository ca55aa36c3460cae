use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::hhmm;

/// One weekly-recurring class slot. Names are not unique; two entries may
/// share a name and are tracked independently.
///
/// `weekday` is kept as entered. Values outside the Mon..Sun table are legal
/// to store and simply never match a day at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseEntry {
    pub id: String,
    pub name: String,
    pub weekday: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub room: String,
    pub lead_minutes: u32,
}

/// Request shape for creating an entry; the store assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCourseEntry {
    pub name: String,
    pub weekday: String,
    #[serde(with = "hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub end_time: NaiveTime,
    pub room: String,
    #[serde(default = "default_lead_minutes")]
    pub lead_minutes: u32,
}

pub fn default_lead_minutes() -> u32 {
    15
}
