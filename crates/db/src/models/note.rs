//! Note model.
//!
//! Tags live in a JSON-encoded TEXT column but are exposed to callers as
//! `Vec<String>`; the manual [`FromRow`] impl decodes them so repositories
//! always hand back the sequence form.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};

use quill_core::tags;
use quill_core::types::{DbId, Timestamp};

/// A row from the `notes` table, tags decoded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category_id: DbId,
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FromRow<'_, SqliteRow> for Note {
    fn from_row(row: &SqliteRow) -> Result<Self, sqlx::Error> {
        let raw: String = row.try_get("tags")?;
        let tags = tags::decode(&raw).map_err(|e| sqlx::Error::ColumnDecode {
            index: "tags".into(),
            source: Box::new(e),
        })?;

        Ok(Self {
            id: row.try_get("id")?,
            title: row.try_get("title")?,
            content: row.try_get("content")?,
            category_id: row.try_get("category_id")?,
            tags,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

/// DTO for creating a new note.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNote {
    pub title: String,
    pub content: Option<String>,
    pub category_id: DbId,
    pub tags: Option<Vec<String>>,
}

/// DTO for updating a note. Absent fields keep their prior value.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category_id: Option<DbId>,
    pub tags: Option<Vec<String>>,
}
