//! Category model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use quill_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
}

/// A category joined with its derived note count for list responses.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryWithCount {
    #[serde(flatten)]
    pub category: Category,
    pub note_count: i64,
}

/// One `(category_id, count)` pair from scanning the `notes` table.
#[derive(Debug, FromRow)]
pub struct CategoryNoteCount {
    pub category_id: DbId,
    pub note_count: i64,
}

/// DTO for creating a new category.
#[derive(Debug, Deserialize)]
pub struct CreateCategory {
    pub name: String,
    pub color: Option<String>,
}

/// DTO for updating a category.
#[derive(Debug, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub color: Option<String>,
}
