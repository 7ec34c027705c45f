//! # Class Handlers
//!
//! `GET /classes` searches classes by subject, week day and time of day.
//! `POST /classes` registers a tutor together with one class and its weekly
//! schedule.
//!
//! Both handlers take their extractor results as `Result`s so that malformed
//! requests produce the same error bodies as the other failures of each
//! endpoint instead of axum's default rejections.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    Json,
};
use eyre::eyre;
use proffy_core::{
    errors::ProffyError,
    models::class::{ClassListing, CreateClassRequest, CreatedClass, SearchClassesQuery},
    time::format_minutes,
};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{middleware::error_handling::AppError, ApiState};

/// Lists the classes that are available at a given week day and time
///
/// # Endpoint
///
/// ```text
/// GET /classes?subject=Math&week_day=2&time=08:30
/// ```
///
/// A class matches when its subject equals `subject` exactly and one of its
/// schedule slots falls on `week_day` with `from <= time < to`. Each match
/// is returned once, flattened with its tutor's profile.
///
/// # Errors
///
/// * `ProffyError::MissingFilters` - a filter is absent or empty; the store is not called
/// * `ProffyError::Validation` - `week_day` is not an integer or `time` is not `HH:MM`
/// * `ProffyError::Database` - the store failed
#[axum::debug_handler]
pub async fn search_classes(
    State(state): State<Arc<ApiState>>,
    query: Result<Query<SearchClassesQuery>, QueryRejection>,
) -> Result<Json<Vec<ClassListing>>, AppError> {
    let Query(query) = query.map_err(|rejection| ProffyError::Validation(rejection.body_text()))?;
    let filter = query.into_filter()?;

    debug!(
        "Searching classes: subject={}, week_day={}, time={}",
        filter.subject,
        filter.week_day,
        format_minutes(filter.time_in_minutes)
    );

    let classes = state
        .classes
        .search_classes(&filter)
        .await
        .map_err(ProffyError::Database)?;

    Ok(Json(classes))
}

/// Registers a tutor, their class and its weekly schedule
///
/// # Endpoint
///
/// ```text
/// POST /classes
/// {
///   "name": "Diego", "avatar": "https://...", "whatsapp": "5511...", "bio": "...",
///   "subject": "Physics", "cost": 80,
///   "schendule": [{ "week_day": 1, "from": "08:00", "to": "12:00" }]
/// }
/// ```
///
/// Responds `201 Created` with an empty body. Every failure, whether a
/// malformed body, a malformed time or a storage error, leaves nothing behind
/// and is reported as `ProffyError::CreationFailed`; the cause is only logged.
#[axum::debug_handler]
pub async fn create_class(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let created = register_class(&state, payload)
        .await
        .map_err(ProffyError::CreationFailed)?;

    info!(
        "Class registered: class_id={}, user_id={}, slots={}",
        created.class_id, created.user_id, created.slot_count
    );

    Ok(StatusCode::CREATED)
}

async fn register_class(
    state: &ApiState,
    payload: Result<Json<CreateClassRequest>, JsonRejection>,
) -> eyre::Result<CreatedClass> {
    let Json(request) =
        payload.map_err(|rejection| eyre!("Malformed request body: {}", rejection.body_text()))?;

    // Times are converted before the store opens its transaction
    let new_class = request.into_new_class()?;

    state.classes.create_class(new_class).await
}
