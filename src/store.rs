use std::sync::{PoisonError, RwLock};

use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::{CourseEntry, NewCourseEntry};

pub const MAX_LEAD_MINUTES: u32 = 60;

/// Session-scoped course table. Entries live only as long as the process;
/// persistence across restarts is out of scope.
#[derive(Debug, Default)]
pub struct CourseStore {
    entries: RwLock<Vec<CourseEntry>>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cloned snapshot, so an evaluation pass never sees a half-applied change.
    pub fn list(&self) -> Vec<CourseEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn add(&self, req: NewCourseEntry) -> Result<CourseEntry, AppError> {
        let entry = Self::build_entry(req)?;
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry.clone());
        info!(
            "added course: {} ({} {}-{}, room {})",
            entry.name,
            entry.weekday,
            entry.start_time.format("%H:%M"),
            entry.end_time.format("%H:%M"),
            entry.room,
        );
        Ok(entry)
    }

    /// Removes every entry with this exact name and returns how many went
    /// away. Same-named time slots count as one course for deletion purposes.
    pub fn remove_by_name(&self, name: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|e| e.name != name);
        let removed = before - entries.len();
        if removed > 0 {
            info!("removed {} entries named {}", removed, name);
        }
        removed
    }

    /// All-or-nothing batch append: one invalid row rejects the whole batch
    /// and leaves the table untouched.
    pub fn bulk_add(&self, reqs: Vec<NewCourseEntry>) -> Result<Vec<CourseEntry>, AppError> {
        let built = reqs
            .into_iter()
            .map(Self::build_entry)
            .collect::<Result<Vec<_>, _>>()?;
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(built.iter().cloned());
        info!("imported {} courses", built.len());
        Ok(built)
    }

    fn build_entry(req: NewCourseEntry) -> Result<CourseEntry, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::Validation("course name must not be empty".into()));
        }
        if req.room.trim().is_empty() {
            return Err(AppError::Validation("room must not be empty".into()));
        }
        if req.lead_minutes > MAX_LEAD_MINUTES {
            return Err(AppError::Validation(format!(
                "lead_minutes must be at most {}",
                MAX_LEAD_MINUTES
            )));
        }
        Ok(CourseEntry {
            id: Uuid::new_v4().to_string(),
            name: req.name,
            weekday: req.weekday,
            start_time: req.start_time,
            end_time: req.end_time,
            room: req.room,
            lead_minutes: req.lead_minutes,
        })
    }
}
