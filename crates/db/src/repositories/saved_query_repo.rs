//! Repository for the `saved_queries` table.

use sqlx::PgPool;

use sqlhub_core::types::DbId;

use crate::models::saved_query::{CreateSavedQuery, SavedQuery, UpdateSavedQuery};

/// Column list for `saved_queries` queries.
const COLUMNS: &str =
    "id, folder_id, name, sql_text, description, is_favorite, created_at, updated_at";

/// Provides CRUD operations for saved queries.
pub struct SavedQueryRepo;

impl SavedQueryRepo {
    /// Create a saved query, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSavedQuery) -> Result<SavedQuery, sqlx::Error> {
        let query = format!(
            "INSERT INTO saved_queries (folder_id, name, sql_text, description, is_favorite) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedQuery>(&query)
            .bind(input.folder_id)
            .bind(&input.name)
            .bind(&input.sql_text)
            .bind(&input.description)
            .bind(input.is_favorite.unwrap_or(false))
            .fetch_one(pool)
            .await
    }

    /// Find a saved query by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<SavedQuery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM saved_queries WHERE id = $1");
        sqlx::query_as::<_, SavedQuery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List saved queries, optionally filtered by a name/description search
    /// term, favorites first then by name.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<SavedQuery>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM saved_queries \
             WHERE $1::TEXT IS NULL \
                OR name ILIKE '%' || $1 || '%' \
                OR description ILIKE '%' || $1 || '%' \
             ORDER BY is_favorite DESC, name"
        );
        sqlx::query_as::<_, SavedQuery>(&query)
            .bind(search)
            .fetch_all(pool)
            .await
    }

    /// Update a saved query, returning the updated row.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSavedQuery,
    ) -> Result<Option<SavedQuery>, sqlx::Error> {
        let query = format!(
            "UPDATE saved_queries SET \
                folder_id = COALESCE($2, folder_id), \
                name = COALESCE($3, name), \
                sql_text = COALESCE($4, sql_text), \
                description = COALESCE($5, description), \
                is_favorite = COALESCE($6, is_favorite), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SavedQuery>(&query)
            .bind(id)
            .bind(input.folder_id)
            .bind(&input.name)
            .bind(&input.sql_text)
            .bind(&input.description)
            .bind(input.is_favorite)
            .fetch_optional(pool)
            .await
    }

    /// Delete a saved query. Returns `true` when a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_queries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete all saved queries. Used by import with overwrite.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM saved_queries").execute(pool).await?;
        Ok(result.rows_affected())
    }
}
