//! classbell -- a personal course-schedule reminder service.
//!
//! Weekly class entries live in an in-memory store; every `/status` poll
//! re-evaluates the wall clock against them and reports which courses are
//! in progress, about to start (alert fires), or still ahead today.

pub mod api;
pub mod csv_io;
pub mod error;
pub mod evaluator;
pub mod models;
pub mod notify;
pub mod state;
pub mod store;
