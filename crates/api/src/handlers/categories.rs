//! Handlers for category CRUD.
//!
//! GET list responses carry each category's derived note count so the
//! sidebar can render badges without a second round trip.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use quill_core::error::CoreError;
use quill_core::notes::{validate_category_color, validate_category_name};
use quill_core::types::DbId;
use quill_db::models::category::{CategoryWithCount, CreateCategory, UpdateCategory};
use quill_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// GET /categories
///
/// List all categories with their note counts, in creation order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = CategoryRepo::list(&state.pool).await?;
    let counts: HashMap<DbId, i64> = CategoryRepo::note_counts(&state.pool)
        .await?
        .into_iter()
        .map(|c| (c.category_id, c.note_count))
        .collect();

    let data: Vec<CategoryWithCount> = categories
        .into_iter()
        .map(|category| CategoryWithCount {
            note_count: counts.get(&category.id).copied().unwrap_or(0),
            category,
        })
        .collect();

    Ok(axum::Json(data))
}

/// POST /categories
///
/// Create a new category.
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    validate_category_name(&input.name).map_err(AppError::BadRequest)?;
    if let Some(ref color) = input.color {
        validate_category_color(color).map_err(AppError::BadRequest)?;
    }

    let category = CategoryRepo::create(&state.pool, &input).await?;

    tracing::info!(
        category_id = category.id,
        name = %category.name,
        "Category created"
    );

    Ok((StatusCode::CREATED, axum::Json(category)))
}

/// PUT /categories/{id}
///
/// Merge the given fields onto an existing category.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = CategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id,
        })?;

    tracing::info!(category_id = id, "Category updated");

    Ok(axum::Json(category))
}

/// DELETE /categories/{id}
///
/// Delete a category and all notes referencing it.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = CategoryRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }));
    }

    tracing::info!(category_id = id, "Category deleted with its notes");

    Ok(StatusCode::NO_CONTENT)
}
