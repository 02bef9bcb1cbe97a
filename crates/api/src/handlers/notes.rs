//! Handlers for note CRUD, filtering, and search.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use quill_core::error::CoreError;
use quill_core::notes::{validate_note_content, validate_note_title};
use quill_core::types::DbId;
use quill_db::models::note::{CreateNote, UpdateNote};
use quill_db::repositories::{CategoryRepo, NoteRepo};

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Query parameters for listing notes.
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListNotesParams {
    pub category_id: Option<DbId>,
    pub search: Option<String>,
}

/// Reject payloads naming a category that does not exist.
async fn ensure_category_exists(state: &AppState, category_id: DbId) -> AppResult<()> {
    if CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest(format!(
            "categoryId {category_id} does not reference an existing category"
        )));
    }
    Ok(())
}

/// GET /notes?categoryId=&search=
///
/// List notes, most recently updated first, optionally filtered by
/// category and/or a case-insensitive search term.
pub async fn list_notes(
    State(state): State<AppState>,
    Query(params): Query<ListNotesParams>,
) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list(&state.pool, params.category_id, params.search.as_deref()).await?;
    Ok(axum::Json(notes))
}

/// GET /notes/{id}
///
/// Get a single note by ID.
pub async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let note = NoteRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: "Note", id })?;

    Ok(axum::Json(note))
}

/// POST /notes
///
/// Create a new note in an existing category.
pub async fn create_note(
    State(state): State<AppState>,
    Json(input): Json<CreateNote>,
) -> AppResult<impl IntoResponse> {
    validate_note_title(&input.title).map_err(AppError::BadRequest)?;
    if let Some(ref content) = input.content {
        validate_note_content(content).map_err(AppError::BadRequest)?;
    }
    ensure_category_exists(&state, input.category_id).await?;

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        note_id = note.id,
        category_id = note.category_id,
        "Note created"
    );

    Ok((StatusCode::CREATED, axum::Json(note)))
}

/// PUT /notes/{id}
///
/// Merge the present fields onto an existing note, refreshing its
/// update timestamp.
pub async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<impl IntoResponse> {
    if let Some(ref title) = input.title {
        validate_note_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref content) = input.content {
        validate_note_content(content).map_err(AppError::BadRequest)?;
    }
    if let Some(category_id) = input.category_id {
        ensure_category_exists(&state, category_id).await?;
    }

    let note = NoteRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: "Note", id })?;

    tracing::info!(note_id = id, "Note updated");

    Ok(axum::Json(note))
}

/// DELETE /notes/{id}
///
/// Delete a note.
pub async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Note", id }));
    }

    tracing::info!(note_id = id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
