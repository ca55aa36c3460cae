pub mod course;
pub mod hhmm;

pub use course::{CourseEntry, NewCourseEntry};
