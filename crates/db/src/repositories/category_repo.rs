//! Repository for the `categories` table.

use sqlx::SqlitePool;

use quill_core::notes::DEFAULT_CATEGORY_COLOR;
use quill_core::types::{now, DbId};

use crate::models::category::{Category, CategoryNoteCount, CreateCategory, UpdateCategory};

/// Column list for categories queries.
const COLUMNS: &str = "id, name, color, created_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List all categories, ordered by creation time ascending.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY created_at ASC, id ASC");
        sqlx::query_as::<_, Category>(&query).fetch_all(pool).await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a new category, returning the created row.
    ///
    /// An omitted or empty color falls back to [`DEFAULT_CATEGORY_COLOR`].
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let color = input
            .color
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CATEGORY_COLOR);
        let query = format!(
            "INSERT INTO categories (name, color, created_at)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(color)
            .bind(now())
            .fetch_one(pool)
            .await
    }

    /// Update a category by ID, returning the updated row.
    ///
    /// Absent fields keep their prior value; present fields are merged
    /// without further validation.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                color = COALESCE($3, color)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category and every note referencing it.
    ///
    /// Both deletes run in one transaction so a crash cannot leave the
    /// category row behind after its notes are gone (or the reverse).
    /// Returns `true` if the category row existed, independent of how many
    /// notes were removed.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM notes WHERE category_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count notes per category by scanning the `notes` table.
    ///
    /// Categories with zero notes produce no row; callers treat absence
    /// as zero.
    pub async fn note_counts(pool: &SqlitePool) -> Result<Vec<CategoryNoteCount>, sqlx::Error> {
        sqlx::query_as::<_, CategoryNoteCount>(
            "SELECT category_id, COUNT(*) AS note_count FROM notes GROUP BY category_id",
        )
        .fetch_all(pool)
        .await
    }
}
