use std::io::Read;

use csv::{ReaderBuilder, Trim, Writer};

use crate::error::AppError;
use crate::models::{CourseEntry, NewCourseEntry};

/// Column identifiers the import requires and the export emits, in order.
pub const COLUMNS: [&str; 6] = [
    "name",
    "weekday",
    "start_time",
    "end_time",
    "room",
    "lead_minutes",
];

/// Parses an uploaded timetable. A missing required column rejects the whole
/// file before any row is read; a malformed row rejects it wholesale too --
/// imports are never partially merged.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<NewCourseEntry>, AppError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(AppError::ImportSchema(format!(
            "missing required columns: {}",
            missing.join(", ")
        )));
    }

    let mut rows = Vec::new();
    for record in rdr.deserialize::<NewCourseEntry>() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Renders the current table as UTF-8 CSV, times as "HH:MM". Store-internal
/// ids are not exported; re-importing the file creates fresh entries.
pub fn export_csv(entries: &[CourseEntry]) -> Result<Vec<u8>, AppError> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(COLUMNS)?;
    for entry in entries {
        wtr.write_record([
            entry.name.as_str(),
            entry.weekday.as_str(),
            &entry.start_time.format("%H:%M").to_string(),
            &entry.end_time.format("%H:%M").to_string(),
            entry.room.as_str(),
            &entry.lead_minutes.to_string(),
        ])?;
    }
    wtr.into_inner()
        .map_err(|e| AppError::ImportParse(csv::Error::from(e.into_error())))
}
