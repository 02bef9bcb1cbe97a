//! Repository for the `notes` table.

use sqlx::SqlitePool;

use quill_core::tags;
use quill_core::types::{now, DbId};

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, title, content, category_id, tags, created_at, updated_at";

fn encode_tags(values: &[String]) -> Result<String, sqlx::Error> {
    tags::encode(values).map_err(|e| sqlx::Error::Encode(Box::new(e)))
}

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// List notes, optionally scoped to a category and/or a search term.
    ///
    /// The search term matches case-insensitively as a substring of the
    /// title, the content, or the serialized tags column (OR semantics).
    /// Results come back most-recently-updated first.
    pub async fn list(
        pool: &SqlitePool,
        category_id: Option<DbId>,
        search: Option<&str>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        let pattern = search.map(|s| format!("%{}%", s.to_lowercase()));
        let query = format!(
            "SELECT {COLUMNS} FROM notes
             WHERE ($1 IS NULL OR category_id = $1)
               AND ($2 IS NULL
                    OR lower(title) LIKE $2
                    OR lower(content) LIKE $2
                    OR lower(tags) LIKE $2)
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(category_id)
            .bind(pattern)
            .fetch_all(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new note, returning the created row.
    ///
    /// Content defaults to the empty string and tags to the empty
    /// sequence; `created_at` and `updated_at` are stamped with the same
    /// instant.
    pub async fn create(pool: &SqlitePool, input: &CreateNote) -> Result<Note, sqlx::Error> {
        let tags_json = match &input.tags {
            Some(values) => encode_tags(values)?,
            None => tags::EMPTY.to_string(),
        };
        let query = format!(
            "INSERT INTO notes (title, content, category_id, tags, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(input.content.as_deref().unwrap_or(""))
            .bind(input.category_id)
            .bind(tags_json)
            .bind(now())
            .fetch_one(pool)
            .await
    }

    /// Update a note by ID, returning the updated row.
    ///
    /// Only fields present in the payload are merged; `updated_at` always
    /// moves to the current time.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let tags_json = match &input.tags {
            Some(values) => Some(encode_tags(values)?),
            None => None,
        };
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                content = COALESCE($3, content),
                category_id = COALESCE($4, category_id),
                tags = COALESCE($5, tags),
                updated_at = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.category_id)
            .bind(tags_json)
            .bind(now())
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
