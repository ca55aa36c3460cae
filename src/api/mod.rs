use axum::Json;
use axum::body::Bytes;
use axum::extract::Path;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, post};
use axum::{Router, extract::State, http::StatusCode, routing::get};
use chrono::Local;
use serde::Serialize;

use crate::csv_io;
use crate::error::AppError;
use crate::evaluator::{self, Evaluation};
use crate::models::{CourseEntry, NewCourseEntry};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/import", post(import_courses))
        .route("/courses/export", get(export_courses))
        .route("/courses/{name}", delete(remove_courses))
        .route("/status", get(status))
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn list_courses(State(state): State<AppState>) -> Json<Vec<CourseEntry>> {
    Json(state.store.list())
}

async fn create_course(
    State(state): State<AppState>,
    Json(req): Json<NewCourseEntry>,
) -> Result<Json<CourseEntry>, AppError> {
    let entry = state.store.add(req)?;
    Ok(Json(entry))
}

#[derive(Serialize)]
struct RemovedResponse {
    removed: usize,
}

/// Deletes every entry carrying this exact name, not just one slot.
async fn remove_courses(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RemovedResponse>, AppError> {
    let removed = state.store.remove_by_name(&name);
    if removed == 0 {
        return Err(AppError::NotFound);
    }
    Ok(Json(RemovedResponse { removed }))
}

async fn import_courses(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<CourseEntry>>, AppError> {
    let rows = csv_io::parse_csv(body.as_ref())?;
    let added = state.store.bulk_add(rows)?;
    Ok(Json(added))
}

async fn export_courses(State(state): State<AppState>) -> Result<Response, AppError> {
    let data = csv_io::export_csv(&state.store.list())?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"timetable.csv\"",
            ),
        ],
        data,
    )
        .into_response())
}

/// The poll tick: every request runs one full evaluation pass at wall-clock
/// now against a snapshot of the store. There is no background timer; alert
/// deduplication across polls is the caller's cadence, not ours.
async fn status(State(state): State<AppState>) -> Json<Evaluation> {
    let now = Local::now().naive_local();
    let entries = state.store.list();
    Json(evaluator::evaluate(now, &entries, state.notifier.as_ref()))
}
